use cluegrid_core as puzzle;
use gloo::events::{EventListener, EventListenerOptions};
use puzzle::{AppState, CellHighlight, ClueIndex, Coord, Coord2, Effect, Effects, Modal, Msg};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::Args;
use crate::dispatch;
use crate::socket::SyncChannel;

/// Keys whose browser default (focus change, page scroll, history back) would
/// fight the cursor.
const CAPTURED_KEYS: [&str; 7] = [
    "Tab",
    "ShiftTab",
    "Backspace",
    "ArrowUp",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
];

fn key_code(code: &str, shift: bool) -> String {
    match code {
        "Tab" if shift => "ShiftTab".to_string(),
        _ => code.to_string(),
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct PuzzleProps {
    puzzle_url: String,
    #[prop_or_default]
    socket_url: Option<String>,
}

impl From<Args> for PuzzleProps {
    fn from(args: Args) -> Self {
        Self {
            puzzle_url: args.puzzle,
            socket_url: args.socket,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: Coord,
    col: Coord,
    letter: Option<char>,
    grid_number: Option<u32>,
    highlight: CellHighlight,
    callback: Callback<Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        letter,
        grid_number,
        highlight,
        callback,
    } = props.clone();

    let mut class = classes!("cell");
    for name in highlight.class_names() {
        class.push(name);
    }

    if highlight.contains(CellHighlight::BLOCKED) {
        return html! { <td {class}/> };
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, col);
        callback.emit((row, col));
    });

    html! {
        <td {class} {onclick}>
            if let Some(number) = grid_number {
                <small>{number}</small>
            }
            <span>{letter.map(String::from).unwrap_or_default()}</span>
        </td>
    }
}

#[derive(Properties, PartialEq)]
struct ModalProps {
    #[prop_or_default]
    children: Html,
}

/// Renders its children into `document.body` instead of in place.
#[function_component]
fn ModalPortal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

pub(crate) struct PuzzleView {
    state: AppState,
    channel: Option<SyncChannel>,
    pending_scroll: Option<ClueIndex>,
    _keydown: EventListener,
}

impl PuzzleView {
    fn create_key_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new_with_options(
            &gloo::utils::document(),
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let code = key_code(&event.code(), event.shift_key());
                if CAPTURED_KEYS.contains(&code.as_str()) {
                    event.prevent_default();
                }
                link.send_message(Msg::KeyPressed(code));
            },
        )
    }

    fn connect(ctx: &Context<Self>) -> Option<SyncChannel> {
        let url = ctx.props().socket_url.as_deref()?;
        match SyncChannel::connect(url, ctx.link().callback(|msg| msg)) {
            Ok(channel) => Some(channel),
            Err(err) => {
                log::error!("sync channel unavailable: {}", err);
                None
            }
        }
    }

    fn run_effects(&mut self, ctx: &Context<Self>, effects: Effects) {
        for effect in effects {
            log::trace!("effect: {:?}", effect);
            match effect {
                Effect::FetchPuzzle { url } => ctx
                    .link()
                    .send_future(async move { Msg::FetchedData(dispatch::fetch_puzzle(&url).await) }),
                Effect::ScrollToClue(index) => self.pending_scroll = Some(index),
                effect => {
                    let Some(message) = effect.sync_message() else {
                        continue;
                    };
                    match &self.channel {
                        Some(channel) => channel.send(&message),
                        None => log::trace!("offline, dropping {:?}", message),
                    }
                }
            }
        }
    }

    fn view_clue(&self, ctx: &Context<Self>, puzzle: &puzzle::PuzzleState, index: ClueIndex) -> Html {
        let Some(clue) = puzzle.clues().get(index) else {
            return html! {};
        };
        let class = classes!(
            "clue",
            puzzle.is_active_clue(index).then_some("active"),
            (puzzle.other_clue_index() == Some(index)).then_some("other-clue"),
        );
        let onclick = ctx.link().callback(move |_| Msg::ClueClicked(index));

        html! {
            <li id={puzzle::clue_element_id(index)} {class} {onclick}>
                <b>{format!("{} {}", clue.grid_number, clue.direction.as_str())}</b>
                <span>{clue.display_text()}</span>
                <code>{puzzle.clue_fill(index)}</code>
            </li>
        }
    }

    fn view_info(&self, ctx: &Context<Self>, puzzle: &puzzle::PuzzleState) -> Html {
        if puzzle.modal() != Modal::Info {
            return html! {};
        }
        let info = puzzle.info();
        let on_close = ctx.link().callback(|_| Msg::CloseModal);

        html! {
            <ModalPortal>
                <dialog class="cluegrid-info" open={true}>
                    <h2>{&info.title}</h2>
                    <dl>
                        <dt>{"Author"}</dt><dd>{&info.author}</dd>
                        <dt>{"Editor"}</dt><dd>{&info.editor}</dd>
                        <dt>{"Date"}</dt><dd>{&info.date}</dd>
                        <dt>{"Copyright"}</dt><dd>{&info.copyright}</dd>
                    </dl>
                    <button onclick={on_close}>{"Close"}</button>
                </dialog>
            </ModalPortal>
        }
    }

    fn view_puzzle(&self, ctx: &Context<Self>, puzzle: &puzzle::PuzzleState) -> Html {
        let (rows, cols) = puzzle.grid().size();
        let on_cell = ctx.link().callback(Msg::CellClicked);
        let on_info = ctx.link().callback(|_| Msg::SetModalInfo);
        let on_solve = ctx.link().callback(|_| Msg::SolveActiveClue);
        let on_check = ctx.link().callback(|_| Msg::CheckActiveClue);

        html! {
            <div class="cluegrid">
                <header>
                    <h1>{&puzzle.info().title}</h1>
                    <button onclick={on_info}>{"Info"}</button>
                    <button onclick={on_check}>{"Check clue"}</button>
                    <button onclick={on_solve}>{"Solve clue"}</button>
                </header>
                <table class="cluegrid-grid">
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).filter_map(|col| {
                                        let cell = puzzle.grid().get((row, col))?;
                                        let highlight = puzzle.cell_highlight((row, col));
                                        let callback = on_cell.clone();
                                        Some(html! {
                                            <CellView
                                                {row}
                                                {col}
                                                letter={cell.display_letter()}
                                                grid_number={cell.grid_number}
                                                {highlight}
                                                {callback}
                                            />
                                        })
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <ol id={puzzle::SCROLL_AREA_ID} class="cluegrid-clues">
                    { for (0..puzzle.clues().len()).map(|index| self.view_clue(ctx, puzzle, index)) }
                </ol>
                { self.view_info(ctx, puzzle) }
            </div>
        }
    }
}

impl Component for PuzzleView {
    type Message = Msg;
    type Properties = PuzzleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = puzzle::Config {
            puzzle_url: ctx.props().puzzle_url.clone(),
        };
        let (state, effects) = puzzle::init(&config);

        let mut view = Self {
            state,
            channel: Self::connect(ctx),
            pending_scroll: None,
            _keydown: Self::create_key_listener(ctx),
        };
        view.run_effects(ctx, effects);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let rerender = !matches!(msg, Msg::ScrollSettled | Msg::NoOp);

        let (state, effects) = puzzle::update(msg, std::mem::take(&mut self.state));
        self.state = state;
        self.run_effects(ctx, effects);

        rerender || self.pending_scroll.is_some()
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let Some(index) = self.pending_scroll.take() else {
            return;
        };
        if let Err(err) = dispatch::scroll_to_clue(index) {
            log::debug!("scroll to clue {} skipped: {}", index, err);
        }
        ctx.link().send_message(Msg::ScrollSettled);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state {
            AppState::Loading => html! {
                <div class="cluegrid loading">{"Loading puzzle..."}</div>
            },
            AppState::Failure => html! {
                <div class="cluegrid failure">{"Could not load the puzzle."}</div>
            },
            AppState::Loaded(puzzle) => self.view_puzzle(ctx, puzzle),
        }
    }
}
