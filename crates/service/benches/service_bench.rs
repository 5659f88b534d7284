use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::service::{AuthService, AuthConfig};
use service::auth::repository::mock::MockAuthRepository;
use service::auth::domain::{RegisterInput, LoginInput};
use service::directory::{DirectoryConfig, DirectoryService};
use service::directory::domain::{ListQuery, StudentInput};
use service::directory::repository::mock::MockStudentRepository;
use service::matching::TextMatch;

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    let cfg = AuthConfig { jwt_secret: "secret".into(), token_ttl: chrono::Duration::hours(1), email_match: TextMatch::Exact };
    let svc = AuthService::new(repo, cfg);

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.register(RegisterInput { email: "bench@example.com".into(), username: "Bench".into(), password: "Benchmark1".into() }))
        .unwrap();

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            rt.block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() })).unwrap();
        });
    });
}

fn bench_list(c: &mut Criterion) {
    let repo = Arc::new(MockStudentRepository::default());
    let svc = DirectoryService::new(repo, DirectoryConfig::default());
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        for i in 0..1_000 {
            let input = StudentInput { first_name: format!("Student{i}"), age: i % 60, ..Default::default() };
            svc.add(Some(input)).await.unwrap();
        }
    });

    c.bench_function("directory_list_search_sort", |b| {
        b.iter(|| {
            let q = ListQuery {
                search: Some("9".into()),
                sort: Some("age".into()),
                order: Some("desc".into()),
                page: Some(2),
                page_size: Some(25),
            };
            rt.block_on(svc.list(q)).unwrap();
        });
    });
}

criterion_group!(benches, bench_login, bench_list);
criterion_main!(benches);
