//! CLI entry point for the project board.
//!
//! # Responsibility
//! - Wire one store, one input form and the two status lists together.
//! - Feed `title|description|people` lines from stdin through the form.
//!
//! Logging is enabled when `PROJBOARD_LOG_DIR` is set (absolute path);
//! `PROJBOARD_LOG_LEVEL` overrides the build-mode default level.

use projboard_core::{
    init_logging, Component, HostContainer, LogSettings, ProjectInputForm, ProjectListView,
    ProjectStatus, ProjectStore,
};
use std::io::{self, BufRead};

fn main() {
    let logging = LogSettings::from_env()
        .and_then(|settings| settings.map_or(Ok(()), |settings| init_logging(&settings)));
    if let Err(err) = logging {
        eprintln!("logging disabled: {err}");
    }

    let store = ProjectStore::instance();
    let mut host = HostContainer::new("app");

    let mut form = ProjectInputForm::default();
    form.configure(&store);
    host.attach(&form);

    let mut lists = Vec::new();
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        let mut list = ProjectListView::new(status);
        list.configure(&store);
        host.attach(&list);
        list.render_content();
        lists.push(list);
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, '|');
        let title = fields.next().unwrap_or_default();
        let description = fields.next().unwrap_or_default();
        let people = fields.next().unwrap_or_default();
        form.set_inputs(title, description, people);

        match form.submit() {
            Ok(id) => println!("added project id={id}"),
            Err(err) => println!("{err}"),
        }
    }

    println!("layout={}", host.children().join(","));
    for list in &lists {
        println!("{} ({})", list.heading(), list.list_id());
        for title in list.items() {
            println!("  - {title}");
        }
    }
    println!("total projects={}", store.len());
    log::info!("event=cli_exit module=cli status=ok total={}", store.len());
}
