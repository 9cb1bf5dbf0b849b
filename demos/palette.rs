//! Prints every color, highlight and attribute, plus a few mixes.
//!
//! Set `ANSI_COLORS_DISABLED` to print plain text, and `RUST_LOG=debug` to
//! see rejected identifiers.

use colorie::{vocab, Namespace, Style, UnknownIdentifierError};
use tracing_subscriber::EnvFilter;

const LINE: &str = "------------------------------------------------------------------------------";

/// Renders `text` unless colors are disabled through the environment.
fn colored(
    text: &str,
    color: Option<&str>,
    highlight: Option<&str>,
    attributes: &[&str],
) -> Result<String, UnknownIdentifierError> {
    let style = Style::from_names(color, highlight, attributes)?;
    if std::env::var_os("ANSI_COLORS_DISABLED").is_some() {
        return Ok(text.to_owned());
    }
    Ok(style.apply(text))
}

fn cprint(
    text: &str,
    color: Option<&str>,
    highlight: Option<&str>,
    attributes: &[&str],
) -> Result<(), UnknownIdentifierError> {
    println!("{}", colored(text, color, highlight, attributes)?);
    Ok(())
}

fn main() -> Result<(), UnknownIdentifierError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Current terminal type: {}", std::env::var("TERM").unwrap_or_default());

    println!("Test basic colors:");
    for color in vocab::members(Namespace::Color).iter().copied() {
        cprint(&format!("{color} color"), Some(color), None, &[])?;
    }
    println!("{LINE}");

    println!("Test highlights:");
    for highlight in vocab::members(Namespace::Highlight).iter().copied() {
        let color = (highlight == "on_white").then_some("grey");
        cprint(&format!("{highlight} color"), color, Some(highlight), &[])?;
    }
    println!("{LINE}");

    println!("Test attributes:");
    for (attribute, color) in vocab::members(Namespace::Attribute)
        .iter()
        .copied()
        .zip(vocab::members(Namespace::Color).iter().copied())
    {
        cprint(&format!("{attribute} {color} color"), Some(color), None, &[attribute])?;
    }
    cprint(
        "Bold underline reverse cyan color",
        Some("cyan"),
        None,
        &["bold", "underline", "reverse"],
    )?;
    cprint(
        "Dark blink concealed white color",
        Some("white"),
        None,
        &["dark", "blink", "concealed"],
    )?;
    println!("{LINE}");

    println!("Test mixing:");
    cprint("Underline red on grey color", Some("red"), Some("on_grey"), &["underline"])?;
    cprint("Reversed green on red color", Some("green"), Some("on_red"), &["reverse"])?;
    println!("{LINE}");

    println!("Test style values:");
    let red = Style::new().red();
    println!("{}", red.paint("Red on") + " white color" + Style::new().on_white());
    println!("{}", "Underline red on grey color" + Style::new().red().on_grey().underline());

    if let Err(err) = Style::from_names(Some("purple"), None, None::<&str>) {
        println!("{err}");
    }
    Ok(())
}
