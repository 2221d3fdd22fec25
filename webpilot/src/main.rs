use anyhow::Context;
use webpilot_core::Browser;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let path = if cfg!(debug_assertions) {
        "webpilot.example.yaml".to_string()
    } else {
        "webpilot.yaml".to_string()
    };
    let context = webpilot_core::load(path.clone()).with_context(|| path)?;

    let mut browser = ConsoleBrowser;

    loop {
        let command = inquire::Text::new("Enter your command").prompt()?;
        if command == "exit" {
            break;
        }

        let action = context.interpret(&command);
        context.execute(&action, &mut browser)?;
    }

    Ok(())
}

/// Stands in for the platform web view: prints what it was asked to do.
struct ConsoleBrowser;

impl Browser for ConsoleBrowser {
    fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        println!("-> navigate {url}");
        Ok(())
    }

    fn click_element_by_text(&mut self, text: &str) -> anyhow::Result<()> {
        println!("-> click element with text {text:?}");
        Ok(())
    }
}
