use tracing_subscriber::EnvFilter;
use voyage_core::{
    InterruptibleProcessor, Pipeline, PipelineBuilder, Stage, Transform, UnifiedProcessor,
};
use voyage_stages::InspectStage;

// The traveler for this example: an order moving through checkout.
#[derive(Debug, Clone)]
struct Order {
    subtotal: f64,
    discount: f64,
    flagged: bool,
}

// A named stage, for the steps worth a type of their own.
struct FraudCheck {
    threshold: f64,
}

impl Transform<Order> for FraudCheck {
    fn apply(&self, mut order: Order) -> Order {
        order.flagged = order.subtotal > self.threshold;
        order
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let order = Order {
        subtotal: 180.0,
        discount: 0.0,
        flagged: false,
    };

    // Plain sequential composition via `pipe`.
    let checkout = Pipeline::new()
        .pipe(FraudCheck { threshold: 500.0 })
        .pipe(InspectStage::new(|o: &Order| {
            println!("after fraud check: {o:?}");
        }))
        .pipe(|mut o: Order| {
            o.discount = o.subtotal * 0.1;
            o
        });

    let processed = checkout.process(order.clone());
    println!("sequential result: {processed:?}");

    // The same stages under an interruptible strategy: stop as soon as an
    // order gets flagged.
    let guarded_checkout =
        checkout.with_processor(InterruptibleProcessor::continue_unless(|o: &Order| o.flagged));
    let processed = guarded_checkout.process(Order {
        subtotal: 900.0,
        ..order.clone()
    });
    println!("interrupted result: {processed:?}");

    // Builder plus the unified strategy: hooks around every stage, a guard
    // that skips the discount for small orders, and an early exit for
    // flagged ones.
    let mut unified = UnifiedProcessor::new();
    unified
        .continue_unless(|o: &Order| o.flagged)
        .before_each(|o: &Order| println!("  -> entering stage with subtotal {}", o.subtotal))
        .after_each(|o: &Order| println!("  <- leaving stage with discount {}", o.discount));

    let mut builder = PipelineBuilder::new();
    builder
        .add(FraudCheck { threshold: 500.0 })
        .add_stage(Stage::guarded(
            |mut o: Order| {
                o.discount = o.subtotal * 0.1;
                o
            },
            |o: &Order| o.subtotal >= 100.0,
        ));

    let pipeline = builder.build_with(unified);
    let processed = pipeline.process(order);
    println!("unified result: {processed:?}");
}
