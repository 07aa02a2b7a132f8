use crate::config::Config;
use crate::presentation::{ConsoleRenderer, TimelineView, presenters};
use anyhow::Result;
use powertrace_engine::analyze;
use powertrace_providers::extract_events;

pub fn handle(config: &Config) -> Result<()> {
    let source = config.open_source();
    let events = extract_events(source.as_ref(), config.now)?;
    let timeline = analyze(events, config.now);

    let view_model = presenters::present_history(&timeline);
    let renderer = ConsoleRenderer::new(config.format, config.color);
    renderer.render_history(&view_model)?;

    Ok(())
}
