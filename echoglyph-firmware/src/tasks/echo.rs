//! Console echo task

use defmt::*;
use echoglyph_core::EchoLoop;
use echoglyph_hal_rp2040::uart::ConsoleRx;
use embassy_time::Delay;

use super::{Context, Matrix};

/// Echo loop task - one console byte per second, forever
#[embassy_executor::task]
pub async fn echo_task(ctx: &'static Context, rx: ConsoleRx<'static>, matrix: Matrix) {
    info!("Echo loop started");

    let mut echo = EchoLoop::new(ctx, rx, matrix, Delay);

    loop {
        match echo.step().await {
            Ok(report) => {
                debug!("Echoed {=u8:#x} as glyph {}", report.byte, report.glyph.get());
                if let Err(e) = report.result {
                    warn!("Echo incomplete: {:?}", e);
                }
            }
            Err(e) => warn!("Console read failed: {:?}", e),
        }
    }
}
