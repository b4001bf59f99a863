//! Ticket listing CLI command.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

/// Print all stored tickets, newest first.
pub async fn list_tickets(state: &AppState, json: bool) -> Result<()> {
    let tickets = state.ticket_service.list_tickets().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
        return Ok(());
    }

    if tickets.is_empty() {
        println!();
        println!(
            "  {} No tickets yet. Submit one via {} or the homepage form.",
            style("i").blue().bold(),
            style("POST /chat").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Received").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Message").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for ticket in &tickets {
        let message = if ticket.message.len() > 60 {
            format!("{}...", &ticket.message[..57])
        } else {
            ticket.message.clone()
        };

        table.add_row(vec![
            Cell::new(ticket.created_at.format("%Y-%m-%d %H:%M").to_string())
                .fg(Color::DarkGrey),
            Cell::new(&ticket.name).fg(Color::Cyan),
            Cell::new(message),
            Cell::new(ticket.id.to_string()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {} ticket(s)", style(tickets.len()).bold());
    println!();

    Ok(())
}
