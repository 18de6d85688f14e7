//! Inventory overlay: the 8x8 slot grid.

use client_frontend_core::view_model::InventoryView;
use game_core::InventorySlot;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Clear, Row, Table},
};

/// Characters per slot, count included.
const SLOT_WIDTH: u16 = 12;

pub fn render(frame: &mut Frame, area: Rect, inventory: &InventoryView) {
    let columns = inventory.rows.first().map_or(0, Vec::len);
    let rows = inventory.rows.iter().map(|row| {
        Row::new(row.iter().map(|slot| {
            Cell::from(slot_label(slot)).style(if slot.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            })
        }))
    });

    let table = Table::new(rows, vec![Constraint::Length(SLOT_WIDTH); columns])
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Inventory "),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(table, area);
}

fn slot_label(slot: &InventorySlot) -> String {
    if slot.is_empty() {
        return "-".to_string();
    }
    let count = format!(" x{}", slot.count);
    let room = usize::from(SLOT_WIDTH).saturating_sub(count.len());
    let name: String = slot.item.chars().take(room).collect();
    format!("{name}{count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_names_are_cut_to_fit_the_count() {
        assert_eq!(slot_label(&InventorySlot::new("Wood", 5)), "Wood x5");
        assert_eq!(slot_label(&InventorySlot::new("Cooked Fish", 3)), "Cooked Fi x3");
        assert_eq!(slot_label(&InventorySlot::new("", 0)), "-");
    }
}
