//! Lumière demo - headless sample page
//!
//! Parses a small social page, upgrades its custom tags, runs the attribute
//! scanners, pokes a few events, and prints everything the page wrote to its
//! console.

use anyhow::Result;
use lumiere_dom::{Console, ConsoleLevel, Event, EventType};
use lumiere_scan::attr;
use lumiere_tags::{register_builtin_tags, TagHost, TagRegistry};
use tracing_subscriber::EnvFilter;

const PAGE: &str = r#"<body>
    <lm-input lm-plhd="What's on your mind?"></lm-input>
    <lm-video src="launch.mp4"></lm-video>
    <lm-select options='[{"value":"rs","label":"Rust"},{"value":"js","label":"JavaScript"}]'></lm-select>

    <div lm-topic="Release" lm-post="Version 2.0 is out"></div>
    <div lm-topic="Hiring" lm-post="We are looking for an engineer"></div>

    <section>
        <button lm-reply="" lm-rl-to="John" lm-rl-from="Alice"></button>
    </section>

    <div lm-role="admin" lm-r-for="user1"></div>
    <div lm-figure="" lm-fgr-name="Grace Hopper"></div>
    <div lm-anc="All hands on Friday"></div>

    <button id="cta" lm-cta="Join the beta"></button>
    <button id="report" lm-report="Feed does not refresh"></button>

    <input id="copyInput">
    <lm-output></lm-output>
</body>"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut doc = lumiere_html::parse(PAGE)?;
    let console = Console::new();

    // Bring the custom tags to life
    let mut registry = TagRegistry::new();
    register_builtin_tags(&mut registry)?;
    let mut host = TagHost::new(registry, console.clone());
    let upgraded = host.upgrade(&mut doc);
    tracing::info!("{upgraded} tags upgraded");

    lumiere_scan::welcome(&console);

    // Attribute scanners
    let input = doc.elements_by_tag("lm-input")[0];
    lumiere_scan::set_placeholder(&mut doc, input)?;
    lumiere_scan::create_topics_for_posts(&mut doc, attr::TOPIC, attr::POST);
    lumiere_scan::reply_to_message(&mut doc, "I'm good!", "John", "Alice");
    lumiere_scan::assign_roles(&mut doc, &lumiere_scan::Role::Admin);
    lumiere_scan::identify_figures(&doc, &console);
    lumiere_scan::add_cta_listeners(&mut doc, &console, attr::CTA);
    lumiere_scan::report_errors(&mut doc, &console);
    lumiere_scan::scan_html_for_illegal_usage(PAGE, &console);
    lumiere_scan::create_meeting_link(&mut doc, &console, "https://meet.lumiere.dev");
    lumiere_scan::display_output(
        &mut doc,
        &console,
        &lumiere_scan::post_status_with_reaction("Hello World!", "happy"),
    );

    // Poke the wired-up page; playback listeners live on the wrapped <video>
    let host_node = doc.elements_by_tag("lm-video")[0];
    if let Some(video) = doc.shadow_root(host_node).and_then(|root| root.first_child()) {
        doc.dispatch(Event::new(EventType::Play, video));
        doc.dispatch(Event::new(EventType::Pause, video));
    }
    if let Some(cta) = doc.element_by_id("cta") {
        doc.dispatch(Event::new(EventType::Click, cta));
    }
    if let Some(report) = doc.element_by_id("report") {
        doc.dispatch(Event::new(EventType::Click, report));
    }

    for entry in console.entries() {
        let tag = match entry.level {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
        };
        println!("[{tag}] {}", entry.message);
    }
    Ok(())
}
