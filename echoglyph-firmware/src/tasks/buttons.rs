//! Button dispatcher task
//!
//! Waits for a falling edge on either button and hands it to the
//! dispatcher. Runs on the interrupt executor, so a press preempts the
//! echo loop between two of its surface operations.

use defmt::*;
use echoglyph_core::{ButtonPair, Dispatch, InputDispatcher};
use echoglyph_hal_rp2040::gpio::{RpInput, RpOutput};
use embassy_time::Instant;

use super::Context;

#[embassy_executor::task]
pub async fn button_task(
    mut buttons: ButtonPair<RpInput<'static>>,
    mut dispatcher: InputDispatcher<RpOutput<'static>>,
    ctx: &'static Context,
) {
    info!("Button dispatcher started");

    loop {
        let edge = buttons.next_edge(|| Instant::now().as_micros()).await;
        let report = dispatcher.handle(ctx, edge);

        match report.outcome {
            Dispatch::Toggled { color, on } => {
                info!("GPIO{}: {} LED {}", edge.pin, color, if on { "on" } else { "off" });
            }
            Dispatch::Rejected => debug!("GPIO{}: bounce at {}us", edge.pin, edge.timestamp_us),
            Dispatch::Unmatched => debug!("GPIO{}: no binding", edge.pin),
        }

        if let Err(e) = report.result {
            warn!("Status update incomplete: {:?}", e);
        }
    }
}
