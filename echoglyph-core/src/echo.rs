//! Console echo loop
//!
//! Runs in thread mode. One iteration reads a byte, echoes it, shows its
//! glyph on the matrix and the character on the panel, then holds.

use echoglyph_hal::{UartRx, UartTx};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::config::{ECHO_HOLD_MS, ECHO_X, ECHO_Y};
use crate::error::{first_error, Error};
use crate::glyph::GlyphIndex;
use crate::shared::SharedContext;
use crate::state::{LoopEvent, LoopState};
use crate::traits::{DisplaySurface, GlyphMatrix};

/// One completed iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EchoReport {
    pub byte: u8,
    pub glyph: GlyphIndex,
    /// First peripheral failure during the iteration
    pub result: Result<(), Error>,
}

/// Main-loop side of the firmware
pub struct EchoLoop<'a, M: RawMutex, S, C, R, G, D> {
    ctx: &'a SharedContext<M, S, C>,
    rx: R,
    matrix: G,
    delay: D,
    state: LoopState,
}

impl<'a, M, S, C, R, G, D> EchoLoop<'a, M, S, C, R, G, D>
where
    M: RawMutex,
    S: DisplaySurface,
    C: UartTx,
    R: UartRx,
    G: GlyphMatrix,
    D: DelayNs,
{
    pub fn new(ctx: &'a SharedContext<M, S, C>, rx: R, matrix: G, delay: D) -> Self {
        Self {
            ctx,
            rx,
            matrix,
            delay,
            state: LoopState::AwaitingInput,
        }
    }

    /// Run one iteration
    ///
    /// Fails only if the console read fails; everything after the read
    /// runs to the end and reports its first failure in the
    /// [`EchoReport`].
    pub async fn step(&mut self) -> Result<EchoReport, Error> {
        let byte = self.rx.read_byte().await.map_err(|_| Error::Console)?;
        self.state = self.state.transition(LoopEvent::ByteReceived(byte));

        let mut result = self.ctx.write_console(&[byte]);

        self.ctx.clear();

        let glyph = GlyphIndex::classify(byte);
        first_error(
            &mut result,
            self.matrix
                .show(glyph.pattern())
                .await
                .map_err(|_| Error::Matrix),
        );

        self.ctx.draw_char(ECHO_X, ECHO_Y, byte);
        first_error(&mut result, self.ctx.render());

        // The dispatcher may draw during the hold; the next clear wipes it
        self.delay.delay_ms(ECHO_HOLD_MS).await;
        self.state = self.state.transition(LoopEvent::HoldElapsed);

        Ok(EchoReport {
            byte,
            glyph,
            result,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn matrix(&self) -> &G {
        &self.matrix
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
