use crate::config::Config;
use crate::presentation::{ConsoleRenderer, TimelineView, presenters};
use anyhow::Result;
use powertrace_engine::normalize_events;
use powertrace_providers::extract_events;

pub fn handle(config: &Config) -> Result<()> {
    let source = config.open_source();
    let events = normalize_events(extract_events(source.as_ref(), config.now)?);

    let view_model = presenters::present_events(&events);
    let renderer = ConsoleRenderer::new(config.format, config.color);
    renderer.render_events(&view_model)?;

    Ok(())
}
