//! Interactive session: the state container and the shell loop
//!
//! A session owns the board, the goals, and the editable search query for
//! exactly one run of the program. Nothing survives the session.

use crate::cli::commands::{AddArgs, ShellCommand};
use crate::cli::output::{self, style, CHECK, INFO, LINK};
use crate::content;
use crate::core::{Board, Platform, WeeklyGoals};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::info;
use uuid::Uuid;

/// The view a command renders. The presentation shell switches on this
/// tag; the model underneath never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Pipeline,
    Toolkit,
    Scripts,
    Team,
}

impl View {
    /// Header shown when the view is rendered
    pub fn title(self) -> &'static str {
        match self {
            View::Pipeline => "7-Day Engagement Pipeline",
            View::Toolkit => "Discovery & Scout Toolkit",
            View::Scripts => "Playbooks & Value Propositions",
            View::Team => "Team Metrics & Sync",
        }
    }
}

/// What a command produced
#[derive(Debug)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn text(output: String) -> Self {
        Self {
            output,
            quit: false,
        }
    }
}

/// One interactive run of the board
pub struct Session {
    session_id: Uuid,
    board: Board,
    goals: WeeklyGoals,
    x_query: String,
    view: View,
    theme: ColorfulTheme,
}

impl Session {
    pub fn new(board: Board, goals: WeeklyGoals) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            board,
            goals,
            x_query: content::DEFAULT_X_QUERY.to_string(),
            view: View::Pipeline,
            theme: ColorfulTheme::default(),
        }
    }

    /// The view the session last rendered
    pub fn view(&self) -> View {
        self.view
    }

    /// Read-only access to the board (used by rendering and tests)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the shell loop until `quit`
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} huntboard session {}",
            INFO,
            style(&self.session_id.to_string()[..8]).dim()
        );
        println!("Type 'help' for commands or 'quit' to exit\n");
        info!("Session {} started", self.session_id);

        loop {
            let line: String = Input::with_theme(&self.theme)
                .with_prompt("huntboard")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read input")?;

            if line.trim().is_empty() {
                continue;
            }

            let command = match crate::cli::commands::parse_line(&line) {
                Ok(command) => command,
                Err(e) => {
                    // clap renders its own help/usage text
                    println!("{}", e);
                    continue;
                }
            };

            let command = match command {
                ShellCommand::Add(args) => ShellCommand::Add(self.fill_add_form(args)?),
                other => other,
            };

            match self.execute(command) {
                Ok(reply) => {
                    if !reply.output.is_empty() {
                        println!("{}", reply.output);
                    }
                    if reply.quit {
                        break;
                    }
                }
                Err(e) => {
                    println!("{} {}", output::CROSS, style(e).red());
                }
            }
        }

        info!("Session {} ended", self.session_id);
        Ok(())
    }

    /// Execute one command and return its rendered output.
    ///
    /// Does no terminal I/O, so it is the seam the integration tests use.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Reply> {
        match command {
            ShellCommand::Board(args) => {
                self.view = View::Pipeline;
                let output = if args.json {
                    serde_json::to_string_pretty(self.board.targets())?
                } else {
                    format!(
                        "{}\n\n{}",
                        self.view_header(),
                        output::format_board(&self.board)
                    )
                };
                Ok(Reply::text(output))
            }
            ShellCommand::List(args) => {
                self.view = View::Pipeline;
                let targets: Vec<_> = match args.stage {
                    Some(stage) => self.board.at_stage(stage),
                    None => self.board.targets().iter().collect(),
                };
                let output = if args.json {
                    serde_json::to_string_pretty(&targets)?
                } else if targets.is_empty() {
                    format!("{} No targets found", INFO)
                } else {
                    targets
                        .iter()
                        .map(|t| output::format_target_line(t))
                        .collect::<Vec<_>>()
                        .join("\n")
                };
                Ok(Reply::text(output))
            }
            ShellCommand::Add(args) => {
                let target = self.board.add(
                    args.name.as_deref().unwrap_or_default(),
                    args.niche.as_deref().unwrap_or_default(),
                    args.platform.unwrap_or_default(),
                    args.notes,
                )?;
                Ok(Reply::text(format!(
                    "{} Added {} as target {}",
                    CHECK,
                    style(&target.name).bold(),
                    style(format!("#{}", target.id)).cyan()
                )))
            }
            ShellCommand::Advance(args) => {
                let stage = self.board.advance(args.id)?;
                let name = self.target_name(args.id);
                Ok(Reply::text(output::format_stage_move(&name, stage)))
            }
            ShellCommand::Regress(args) => {
                let stage = self.board.regress(args.id)?;
                let name = self.target_name(args.id);
                Ok(Reply::text(output::format_stage_move(&name, stage)))
            }
            ShellCommand::Toolkit(args) => {
                self.view = View::Toolkit;
                if let Some(query) = args.query {
                    self.x_query = query;
                }
                Ok(Reply::text(self.render_toolkit()?))
            }
            ShellCommand::Scripts => {
                self.view = View::Scripts;
                Ok(Reply::text(self.render_scripts()))
            }
            ShellCommand::Team => {
                self.view = View::Team;
                Ok(Reply::text(self.render_team()))
            }
            ShellCommand::Quit => Ok(Reply {
                output: format!("{} Session closed, board discarded", INFO),
                quit: true,
            }),
        }
    }

    fn target_name(&self, id: crate::core::TargetId) -> String {
        self.board
            .get(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("#{}", id))
    }

    fn view_header(&self) -> String {
        style(self.view.title()).bold().underlined().to_string()
    }

    fn render_toolkit(&self) -> Result<String> {
        let mut out = format!("{}\n\n", self.view_header());

        out.push_str(&format!(
            "{}\n  {}\n  {} {}\n\n",
            style("X / Twitter operators").bold(),
            style(&self.x_query).cyan(),
            LINK,
            content::x_search_url(&self.x_query)?
        ));
        out.push_str(&format!(
            "{}\n  {} {}\n\n",
            style("Substack leaderboards").bold(),
            LINK,
            content::SUBSTACK_EXPLORE_URL
        ));

        for channel in content::channels() {
            out.push_str(&format!("{}\n", style(channel.name).bold()));
            for tip in channel.tips {
                out.push_str(&format!("  {} {}\n", CHECK, tip));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "{} Use 'toolkit --query \"…\"' to edit the search query",
            INFO
        ));
        Ok(out)
    }

    fn render_scripts(&self) -> String {
        let mut out = format!("{}\n\n", self.view_header());

        out.push_str(&format!("{}\n", style("The Pitch").bold()));
        for prop in content::value_props() {
            out.push_str(&format!(
                "  {}\n    {}\n",
                style(prop.title).cyan(),
                prop.body
            ));
        }

        out.push_str(&format!("\n{}\n", style("Engagement scripts").bold()));
        for script in content::day_scripts() {
            out.push_str(&format!(
                "  {}\n    {}\n    {}\n",
                style(format!("Day {}: {}", script.day, script.title)).cyan(),
                style(format!("Objective: {}", script.objective)).dim(),
                style(format!("\"{}\"", script.script)).italic()
            ));
        }
        out
    }

    fn render_team(&self) -> String {
        let progress = self.goals.progress(&self.board);
        format!(
            "{}\n\n{}\n{}",
            self.view_header(),
            style("Current weekly goal").bold(),
            output::format_goal_progress(&progress)
        )
    }

    /// Prompt for any required add fields that were not given inline.
    fn fill_add_form(&self, mut args: AddArgs) -> Result<AddArgs> {
        if args.name.is_none() {
            let name: String = Input::with_theme(&self.theme)
                .with_prompt("Expert/author name")
                .interact_text()
                .context("Failed to read name")?;
            args.name = Some(name);
        }
        if args.niche.is_none() {
            let niche: String = Input::with_theme(&self.theme)
                .with_prompt("Niche/expertise")
                .interact_text()
                .context("Failed to read niche")?;
            args.niche = Some(niche);
        }
        if args.platform.is_none() {
            let labels: Vec<String> = Platform::ALL.iter().map(|p| p.to_string()).collect();
            let selection = Select::with_theme(&self.theme)
                .with_prompt("Platform found")
                .default(0)
                .items(&labels)
                .interact()
                .context("Failed to read platform")?;
            args.platform = Some(Platform::ALL[selection]);
        }
        if args.notes.is_none() {
            let notes: String = Input::with_theme(&self.theme)
                .with_prompt("Initial notes (optional)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read notes")?;
            if !notes.trim().is_empty() {
                args.notes = Some(notes);
            }
        }
        Ok(args)
    }
}
