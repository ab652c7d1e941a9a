use clap::Parser;
use wasm_bindgen::prelude::*;

mod app;
mod dispatch;
mod socket;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Where to fetch the puzzle document from
    #[arg(short, long, default_value = cluegrid_core::DEFAULT_PUZZLE_URL)]
    puzzle: String,

    /// Collaborator channel; edits stay local without it
    #[arg(short, long)]
    socket: Option<String>,
}

impl Args {
    /// Reads `#-v&--puzzle=...&--socket=...` style arguments.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("puzzle: {}, socket: {:?}", args.puzzle, args.socket);

    let root = document()
        .get_element_by_id("cluegrid")
        .expect("Could not find id=\"cluegrid\" element");

    log::debug!("App started");
    yew::Renderer::<app::PuzzleView>::with_root_and_props(root, args.into()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.puzzle, cluegrid_core::DEFAULT_PUZZLE_URL);
        assert_eq!(args.socket, None);
    }

    #[test]
    fn hash_carries_puzzle_and_socket() {
        let args =
            Args::from_location_hash("#--puzzle=data/Oct07-2019.json&--socket=wss://example.test/room")
                .unwrap();

        assert_eq!(args.puzzle, "data/Oct07-2019.json");
        assert_eq!(args.socket.as_deref(), Some("wss://example.test/room"));
    }
}
