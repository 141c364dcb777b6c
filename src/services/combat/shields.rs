use tracing::debug;

use crate::io::OutputWriter;
use crate::models::errors::GameError;
use crate::models::galaxy::Galaxy;
use crate::ui::presenters::format_number;

/// Move energy between the main banks and the shields so that the shields
/// hold exactly `amount` units.
pub fn set_shields(galaxy: &mut Galaxy, amount: f64, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() {
        return;
    }
    match galaxy.enterprise_mut().shield_control(amount) {
        Ok(()) => {
            output.writeln("DEFLECTOR CONTROL ROOM REPORT:");
            output.writeln(&format!(
                "  'SHIELDS NOW AT {} UNITS PER YOUR COMMAND.'",
                format_number(amount)
            ));
        }
        Err(GameError::DeviceDamaged(_)) => {
            output.writeln("SHIELD CONTROL INOPERABLE");
        }
        Err(GameError::InsufficientResources { .. }) => {
            output.writeln("SHIELD CONTROL REPORTS  'THIS IS NOT THE FEDERATION TREASURY.'");
            output.writeln("<SHIELDS UNCHANGED>");
        }
        Err(err) => {
            debug!(%err, "shield request refused");
            output.writeln("<SHIELDS UNCHANGED>");
        }
    }
}
