use crate::commands::{CmdMessage, CmdResult};
use crate::config::DeckIdConfig;
use crate::error::Result;
use crate::ordinal::SwapOutcome;
use crate::store::RecordStore;
use crate::view::{Direction, MoveOutcome};

use super::helpers::{resolve_position, view_for};

/// Moves the record at `position` of the listed view one step in `direction`.
///
/// The result lists the view after the move, whether or not it happened.
pub fn run<S: RecordStore>(
    store: &mut S,
    config: &DeckIdConfig,
    group: Option<&str>,
    position: usize,
    direction: Direction,
) -> Result<CmdResult> {
    let field = &config.label_field;
    let mut view = view_for(store, field, group)?;
    let id = resolve_position(&view, position)?;

    let outcome = view.step(store, field, &id, direction)?;

    let mut result = CmdResult::default();
    let word = match direction {
        Direction::Up => "up",
        Direction::Down => "down",
    };
    let message = match outcome {
        MoveOutcome::Moved => {
            let record = store.get_record(&id)?;
            let message = CmdMessage::success(format!(
                "Moved {} {}: {}",
                position,
                word,
                record.field(field).unwrap_or_default()
            ));
            result.affected_records.push(record);
            message
        }
        MoveOutcome::AtEdge => CmdMessage::warning(format!(
            "Entry {} is already at the {}",
            position,
            if direction == Direction::Up {
                "top"
            } else {
                "bottom"
            }
        )),
        MoveOutcome::Refused(SwapOutcome::CrossGroup) => CmdMessage::warning(format!(
            "Cannot move {} {}: neighbor belongs to another group",
            position, word
        )),
        MoveOutcome::Refused(_) => CmdMessage::warning(format!(
            "Cannot move {} {}: both entries need a valid label",
            position, word
        )),
    };
    result.add_message(message);

    let entries = view.entries(store, field, &config.front_field)?;
    Ok(result.with_listed_entries(entries))
}
