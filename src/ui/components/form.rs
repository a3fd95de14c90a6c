use crate::ui::app::{CalculatorApp, Field};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct FormComponent;

impl FormComponent {
    pub fn render(f: &mut Frame, area: Rect, app: &CalculatorApp) {
        let selected = app.selected_field();

        let items: Vec<ListItem> = app
            .visible_fields()
            .into_iter()
            .map(|field| {
                let is_selected = field == selected;
                let value = match field {
                    Field::Model => format!("< {} >", app.field_text(field)),
                    _ => {
                        let text = app.field_text(field);
                        if is_selected {
                            format!("{}▏", text)
                        } else {
                            text.to_string()
                        }
                    }
                };

                let line = if is_selected {
                    format!("▶ {:<24}{}", field.label(), value)
                } else {
                    format!("  {:<24}{}", field.label(), value)
                };

                if is_selected {
                    ListItem::new(line).style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Usage")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(list, area);
    }
}
