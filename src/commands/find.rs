//! Find command - interactively locate the listener's place in a directory
//!
//! Lists the directory, then repeatedly shows the probe segment with its
//! neighbours and asks whether the listener remembers it. Once the place is
//! found, offers to delete everything before it.

use crate::{
    FindPlaceError,
    config::FindPlaceConfig,
    deletion::{DeletionService, FsDeletion},
    output,
    playlist::Segment,
    search::{Feedback, SearchError, SearchSession, SearchState, display},
    ui::{
        DialoguerInput, NoPlayback, OutputWriter, PlaybackTransport, StdoutWriter, SystemPlayer,
        UserInput,
    },
};
use std::path::Path;

type Result<T> = std::result::Result<T, FindPlaceError>;

/// Presentation settings for the interactive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// Segments shown on each side of the probe
    pub context: usize,
    /// Ask before deleting
    pub confirm_deletions: bool,
    /// Skip progress messages
    pub quiet: bool,
    /// Report what delete-earlier would remove without changing anything
    pub dry_run: bool,
}

impl From<&FindPlaceConfig> for FindOptions {
    fn from(config: &FindPlaceConfig) -> Self {
        Self {
            context: config.context,
            confirm_deletions: config.confirm_deletions,
            quiet: config.quiet,
            dry_run: config.dry_run,
        }
    }
}

/// Everything the loop talks to outside the session
pub struct FindContext<'a> {
    pub input: &'a dyn UserInput,
    pub output: &'a dyn OutputWriter,
    pub deleter: &'a dyn DeletionService,
    pub player: &'a dyn PlaybackTransport,
}

/// How an interactive search ended
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindOutcome {
    /// Located segment, if the listener finished the search
    pub located: Option<Segment>,
    /// Segments removed by delete-earlier
    pub deleted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepAction {
    Remembers,
    DoesNotRemember,
    NotSure,
    Jump,
    StartOver,
    Quit,
}

const STEP_ACTIONS: [StepAction; 6] = [
    StepAction::Remembers,
    StepAction::DoesNotRemember,
    StepAction::NotSure,
    StepAction::Jump,
    StepAction::StartOver,
    StepAction::Quit,
];

impl StepAction {
    const fn label(self) -> &'static str {
        match self {
            Self::Remembers => "Yes, I remember this",
            Self::DoesNotRemember => "No, I don't remember this",
            Self::NotSure => "Not sure (go back one)",
            Self::Jump => "Jump to a segment...",
            Self::StartOver => "Start over",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FinishedAction {
    DeleteEarlier(usize),
    StartOver,
    Done,
}

impl FinishedAction {
    fn label(self) -> String {
        match self {
            Self::DeleteEarlier(count) => format!("Delete the {count} segment(s) before it"),
            Self::StartOver => "Start over".to_string(),
            Self::Done => "Done".to_string(),
        }
    }
}

/// Execute the find command against the local file system and terminal
///
/// # Errors
/// Returns an error if the directory cannot be listed, holds no audio, or
/// user interaction fails.
pub fn execute(dir: &Path, config: &FindPlaceConfig, quiet: bool) -> Result<()> {
    let source = config.playlist()?;
    let mut session = SearchSession::new();
    session.start_from(&source, dir)?;

    let deleter = FsDeletion::new().dry_run(config.dry_run);
    let player: &dyn PlaybackTransport = if config.open_probes {
        &SystemPlayer
    } else {
        &NoPlayback
    };
    let input = DialoguerInput::new();
    let writer = StdoutWriter::new();
    let context = FindContext {
        input: &input,
        output: &writer,
        deleter: &deleter,
        player,
    };

    let mut options = FindOptions::from(config);
    options.quiet |= quiet;

    let outcome = run(&mut session, &context, options)?;
    if quiet && let Some(located) = outcome.located {
        println!("{}", located.path.display());
    }
    Ok(())
}

/// Drive `session` until the listener finishes or quits
///
/// # Errors
/// Returns an error if user interaction fails or the session rejects an
/// event for a reason other than a failed deletion.
pub fn run(session: &mut SearchSession, ctx: &FindContext<'_>, options: FindOptions) -> Result<FindOutcome> {
    let mut outcome = FindOutcome::default();

    loop {
        let state = *session.state().ok_or(SearchError::NotStarted)?;
        render(session, &state, ctx.output, options);

        match state {
            SearchState::Step { .. } => {
                if let Some(probe) = session.probe()
                    && let Err(e) = ctx.player.present(probe)
                {
                    ctx.output.warning(&format!("Could not play {probe}: {e}"));
                }

                let labels: Vec<String> = STEP_ACTIONS.iter().map(|a| a.label().to_string()).collect();
                let choice = ctx
                    .input
                    .prompt_select("Do you remember this segment?", &labels, Some(0))?
                    .map_or(StepAction::Quit, |i| STEP_ACTIONS[i]);

                match choice {
                    StepAction::Remembers => {
                        session.feedback(Feedback::Remembers)?;
                    }
                    StepAction::DoesNotRemember => {
                        session.feedback(Feedback::DoesNotRemember)?;
                    }
                    StepAction::NotSure => {
                        session.rewind()?;
                    }
                    StepAction::Jump => jump(session, ctx, state.index())?,
                    StepAction::StartOver => {
                        session.restart()?;
                        outcome.located = None;
                    }
                    StepAction::Quit => return Ok(outcome),
                }
            }
            SearchState::Success { index, .. } => {
                outcome.located = session.located().cloned();

                let mut actions = Vec::with_capacity(3);
                if index > 0 {
                    actions.push(FinishedAction::DeleteEarlier(index));
                }
                actions.push(FinishedAction::StartOver);
                actions.push(FinishedAction::Done);

                let labels: Vec<String> = actions.iter().map(|a| a.label()).collect();
                let choice = ctx
                    .input
                    .prompt_select("What next?", &labels, Some(actions.len() - 1))?
                    .map_or(FinishedAction::Done, |i| actions[i]);

                match choice {
                    FinishedAction::DeleteEarlier(count) => {
                        outcome.deleted += delete_earlier(session, ctx, options, count)?;
                    }
                    FinishedAction::StartOver => {
                        session.restart()?;
                        outcome.located = None;
                    }
                    FinishedAction::Done => return Ok(outcome),
                }
            }
        }
    }
}

fn render(session: &SearchSession, state: &SearchState, output: &dyn OutputWriter, options: FindOptions) {
    let segments = session.segments();
    output.write("");
    for index in display::window(state.index(), segments.len(), options.context) {
        let status = display::status_of(state, index);
        output.write(&output::status_line(index, &segments[index], status));
    }
    if state.is_success() {
        if let Some(located) = session.located() {
            output.success(&format!("Your place: {located}"));
        }
    } else if !options.quiet {
        output.info(&output::progress(state));
    }
}

fn jump(session: &mut SearchSession, ctx: &FindContext<'_>, current: usize) -> Result<()> {
    let labels: Vec<String> = session
        .segments()
        .iter()
        .enumerate()
        .map(|(i, segment)| output::segment_line(i, segment, false))
        .collect();

    if let Some(target) = ctx
        .input
        .prompt_select("Jump to which segment?", &labels, Some(current))?
    {
        session.select(target)?;
    }
    Ok(())
}

/// Returns the number of segments removed
fn delete_earlier(
    session: &mut SearchSession,
    ctx: &FindContext<'_>,
    options: FindOptions,
    count: usize,
) -> Result<usize> {
    if options.dry_run {
        let ticket = session.begin_delete_earlier()?;
        let result = ctx.deleter.delete(ticket.segments());
        session.cancel_delete_earlier(ticket)?;
        match result {
            Ok(()) => ctx
                .output
                .info(&format!("Dry run: would delete {count} segment(s)")),
            Err(e) => ctx.output.error(&format!("Dry run failed: {e}")),
        }
        return Ok(0);
    }

    if options.confirm_deletions {
        let prompt = format!("Permanently delete {count} segment(s)?");
        if ctx.input.prompt_confirm(&prompt, false)? != Some(true) {
            ctx.output.info("Nothing deleted");
            return Ok(0);
        }
    }

    match session.delete_earlier(ctx.deleter) {
        Ok(done) => {
            ctx.output
                .success(&format!("Deleted {} segment(s)", done.deleted));
            Ok(done.deleted)
        }
        Err(SearchError::Deletion(e)) => {
            ctx.output.error(&format!("Deletion failed, nothing removed: {e}"));
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}
