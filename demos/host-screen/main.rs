//! Runs the stroke timer host screen.
//!
//! Press space to engage the hold (start or resume the timer), press it
//! again to release (pause). Ctrl+C quits.

use bubbletea_rs::Program;
use stroketimer_widgets::host::Model as HostScreen;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<HostScreen>::builder().build()?;
    program.run().await?;
    Ok(())
}
