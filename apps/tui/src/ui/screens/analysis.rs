use crate::app::App;
use crate::ui::screens::{
    categories, origins, page_layout, render_shortcuts, render_status, render_title, top_words,
};
use crate::ui::widgets::loading::{render_load_error, render_loading};
use pasture_core::{AnalysisTab, LazyResource};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Tabs;
use ratatui::Frame;

pub fn render_analysis(app: &App, f: &mut Frame<'_>) {
    let layout = page_layout(f);
    render_title(
        f,
        layout[0],
        "Consumer Analysis",
        "What Chinese consumers say about imported meat",
    );

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(layout[1]);

    render_tabs(app, f, body[0]);

    // The records back every tab; the origins tab also needs its own resource.
    match &app.records {
        LazyResource::Idle | LazyResource::Loading => {
            render_loading(f, body[1], &app.throbber, "Loading data...");
        }
        LazyResource::Failed(message) => render_load_error(f, body[1], message),
        LazyResource::Ready(insights) => match app.view.tab {
            AnalysisTab::Categories => categories::render_categories(app, insights, f, body[1]),
            AnalysisTab::Top100 => top_words::render_top_words(app, insights, f, body[1]),
            AnalysisTab::Origins => origins::render_origins(app, f, body[1]),
        },
    }

    render_status(app, f, layout[2]);
    render_shortcuts(f, layout[3], &shortcuts(app.view.tab));
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = AnalysisTab::ALL
        .iter()
        .map(|tab| TextLine::from(tab.label()))
        .collect::<Vec<_>>();

    let visibility = if app.view.show_contextual {
        "contextual: shown"
    } else {
        "contextual: hidden"
    };

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(20)])
        .split(area);

    let tabs = Tabs::new(titles)
        .select(app.view.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, split[0]);
    f.render_widget(
        Span::styled(visibility, Style::default().fg(Color::DarkGray)),
        split[1],
    );
}

fn shortcuts(tab: AnalysisTab) -> Vec<(&'static str, &'static str)> {
    let mut keys = vec![("Tab", "Switch view")];
    match tab {
        AnalysisTab::Categories => {
            keys.push(("Enter", "Explore"));
            keys.push(("Bksp", "Clear"));
        }
        AnalysisTab::Top100 => {
            keys.push(("f/F", "Filter"));
            keys.push(("Bksp", "All"));
        }
        AnalysisTab::Origins => keys.push(("↑/↓", "Highlight country")),
    }
    keys.push(("h", "Contextual"));
    keys.push(("Esc", "Home"));
    keys.push(("F1", "Help"));
    keys
}
