use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use portal_auth::{
    AccessRequirement, DivisionId, Principal, PrincipalId, Role, SessionSnapshot, evaluate,
    explain_access,
};

/// Principal with `n` memberships; the one that matters sits at the end.
fn principal_with_memberships(n: usize) -> Principal {
    let mut principal = Principal::new(PrincipalId::new());
    for i in 0..n.saturating_sub(1) {
        principal = principal.with_membership(
            DivisionId::parse(format!("div-{i}")).expect("non-empty"),
            Role::new("member"),
        );
    }
    principal.with_membership(DivisionId::from_static("fin"), Role::new("manager"))
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_evaluate");
    let req = AccessRequirement::role_in(
        DivisionId::from_static("fin"),
        [Role::new("manager"), Role::new("lead")],
    );

    for n in [1usize, 10, 100] {
        let session = SessionSnapshot::authenticated(principal_with_memberships(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &session, |b, session| {
            b.iter(|| evaluate(black_box(session), black_box(&req)))
        });
    }
    group.finish();
}

fn bench_explain(c: &mut Criterion) {
    let session = SessionSnapshot::authenticated(principal_with_memberships(10));
    let req = AccessRequirement::role_in(DivisionId::from_static("fin"), [Role::new("lead")]);
    c.bench_function("gate_explain_denied", |b| {
        b.iter(|| explain_access(black_box(&session), black_box(&req)))
    });
}

criterion_group!(benches, bench_evaluate, bench_explain);
criterion_main!(benches);
