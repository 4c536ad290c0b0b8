// ============================================================================
// Basic Usage Example
// ============================================================================

use digit_calculator::prelude::*;
use std::sync::Arc;

fn show(events: &[DisplayEvent]) {
    for event in events {
        let payload = event.payload();
        println!(
            "  display <- {:>6}  reset={:<5} negative={}",
            payload.text, payload.reset_display, payload.negative
        );
    }
}

fn main() -> EngineResult<()> {
    #[cfg(feature = "logging")]
    digit_calculator::utils::init_tracing("debug");

    println!("=== Digit Calculator Example ===\n");

    let (channel, receiver) = ChannelEventHandler::new();
    let mut calc = create_from_config(CalculatorConfig::standard(), Arc::new(LoggingEventHandler))?;
    calc.subscribe(Arc::new(channel));

    println!("Session {}\n", calc.id());

    println!("Typing 12.5 + 0.75 =");
    show(&calc.submit_str("12.5+0.75=")?);
    println!("Result: {}\n", calc.first());

    println!("Typing 5, +/-, + 3 =");
    show(&calc.submit_char('5')?);
    show(&calc.toggle_sign());
    show(&calc.submit_str("+3=")?);
    println!("Result: {}\n", calc.first());

    println!("Clear entry, then clear all");
    show(&calc.submit_str("7-2")?);
    show(&calc.request_clear("CE")?);
    show(&calc.request_clear("C")?);

    if let Err(error) = calc.request_clear("AC") {
        println!("  rejected: {}\n", error);
    }

    // Narrow display: the sum does not fit
    println!("=== Overflow ===");
    let mut narrow = CalculatorBuilder::new()
        .with_max_places(2)
        .build(Arc::new(NoOpEventHandler))?;
    show(&narrow.submit_str("99+9=")?);
    println!("First operand kept: {}\n", narrow.first());

    println!("=== Hexadecimal ===");
    let mut hex = CalculatorBuilder::hexadecimal().build(Arc::new(NoOpEventHandler))?;
    hex.submit_str("ff+1=")?;
    println!("FF + 1 = {}", hex.first());
    hex.submit_str("a-f=")?;
    println!("A - F = {}\n", hex.first());

    println!(
        "Channel handler received {} events",
        receiver.try_iter().count()
    );

    Ok(())
}
