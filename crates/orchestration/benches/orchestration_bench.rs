use common::PaymentPayload;
use common::payload::{AMOUNT, CREDITOR_ACCOUNT, CURRENCY, DEBTOR_ACCOUNT};
use criterion::{Criterion, criterion_group, criterion_main};
use orchestration::{InMemoryEventSink, PaymentOrchestrator, TracingEventSink};

fn payment(amount: &str, currency: &str) -> PaymentPayload {
    PaymentPayload::new()
        .with(DEBTOR_ACCOUNT, "11111111")
        .with(CREDITOR_ACCOUNT, "22222222")
        .with(AMOUNT, amount)
        .with(CURRENCY, currency)
}

fn bench_successful_payment(c: &mut Criterion) {
    let orchestrator = PaymentOrchestrator::<TracingEventSink>::new();

    c.bench_function("orchestration/success_usd", |b| {
        b.iter(|| {
            let mut payload = payment("10.00", "USD");
            orchestrator.orchestrate(&mut payload)
        });
    });
}

fn bench_validation_failure(c: &mut Criterion) {
    let orchestrator = PaymentOrchestrator::<TracingEventSink>::new();

    c.bench_function("orchestration/validation_failure", |b| {
        b.iter(|| {
            let mut payload = PaymentPayload::new().with(AMOUNT, "10.00");
            orchestrator.orchestrate(&mut payload)
        });
    });
}

fn bench_with_recording_sink(c: &mut Criterion) {
    c.bench_function("orchestration/in_memory_sink", |b| {
        b.iter(|| {
            let orchestrator = PaymentOrchestrator::with_sink(InMemoryEventSink::new());
            let mut payload = payment("75000.00", "EUR");
            orchestrator.orchestrate(&mut payload)
        });
    });
}

criterion_group!(
    benches,
    bench_successful_payment,
    bench_validation_failure,
    bench_with_recording_sink
);
criterion_main!(benches);
