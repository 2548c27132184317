//! Collapsible Example
//!
//! Drives an FAQ entry through a scripted sequence of taps and key presses,
//! printing the element tree and the running presence transitions after each
//! step. Logs go to `collapsible.log`.

use std::fs::File;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};
use uidom::{Element, Event, Key, PresenceState};
use uikit::prelude::*;

fn build_tree(
    faq: &Collapsible,
    header: &CollapsibleHeader,
    trigger: &CollapsibleTrigger,
    content: &CollapsibleContent,
) -> Result<Element, UiError> {
    let header = header.clone().child(trigger.render()?).render();
    Ok(faq.render([Some(header), content.render()?]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Trace,
        Config::default(),
        File::create("collapsible.log")?,
    )?;

    let faq = Collapsible::new(CollapsibleProps::new().attr("testID", "faq"));
    faq.on_visibility_change(|transition| {
        log::info!("visibility transition: {transition:?}");
    });

    let header = faq.header().child(Element::text("What is a disclosure widget?"));
    let trigger = faq.trigger().child(Element::text("Toggle"));
    let content = faq.content().child(Element::text(
        "A trigger that shows and hides a region of content.",
    ));
    let widgets: [&dyn Widget; 3] = [&header, &trigger, &content];

    let script = [
        Event::tap(trigger.id()),
        Event::key(trigger.id(), Key::Enter),
        Event::tap("somewhere-else"),
        Event::key(trigger.id(), Key::Char(' ')),
    ];

    let mut presence = PresenceState::new();
    let mut now = Instant::now();
    presence.update_at(Some(&build_tree(&faq, &header, &trigger, &content)?), now);

    for event in &script {
        let result = dispatch(&widgets, event)?;
        println!("{event:?} -> {result:?}");

        if faq.needs_render() {
            let tree = build_tree(&faq, &header, &trigger, &content)?;
            faq.mark_rendered();
            now += Duration::from_millis(50);
            presence.update_at(Some(&tree), now);
            print!("{}", tree.dump());
        }

        let content_id = content.id();
        if let (Some(phase), Some(frame)) = (
            presence.phase(content_id),
            presence.frame_at(content_id, now),
        ) {
            println!("  content {phase:?}: {frame:?}");
        }
        println!();
    }

    Ok(())
}
