//! One handler per subcommand.
//!
//! Every handler validates all of its preconditions before touching the
//! repository, so an `Err` always leaves state exactly as it was. On success
//! a handler returns the text of its single output entry.

mod branch;
mod commit;
mod config;
mod history;
mod integrate;
mod remote;
mod workspace;

use crate::config::GitConfig;
use crate::error::Result;
use crate::help;
use crate::ident::{next_timestamp, IdSource};
use crate::models::{Commit, Signature};
use crate::parser::{BranchAction, Command};
use crate::repository::Repository;
use crate::settings::Settings;

pub(crate) struct Context<'a> {
    pub repo: &'a mut Repository,
    pub config: &'a mut GitConfig,
    pub ids: &'a mut dyn IdSource,
    pub settings: &'a Settings,
}

impl Context<'_> {
    fn configured_author(&self) -> Signature {
        Signature::new(self.config.user_name(), self.config.user_email())
    }

    /// A commit stamped with a fresh id and the next timestamp.
    fn new_commit(&mut self, message: String, author: Signature, branch: String) -> Commit {
        let id = self.ids.next_id();
        let timestamp = next_timestamp(self.repo.commits().len());
        Commit::new(id, message, author, timestamp, branch)
    }
}

pub(crate) fn dispatch(ctx: &mut Context<'_>, command: Command) -> Result<String> {
    match command {
        Command::Help { topic } => help::render(topic.as_deref()),
        Command::Commit { message, author } => commit::commit(ctx, message, author),
        Command::CheckoutNew { branch } => branch::checkout_new(ctx, &branch),
        Command::Checkout { branch } => branch::checkout(ctx, &branch),
        Command::Merge { source, target } => {
            integrate::merge(ctx, source.as_deref(), target.as_deref())
        }
        Command::Rebase { upstream } => integrate::rebase(ctx, &upstream),
        Command::Init => workspace::init(ctx),
        Command::Add(target) => workspace::add(ctx, target),
        Command::Status => workspace::status(ctx),
        Command::Diff => workspace::diff(ctx),
        Command::Branch(BranchAction::List) => branch::list(ctx),
        Command::Branch(BranchAction::Create(name)) => branch::create(ctx, &name),
        Command::Branch(BranchAction::Delete(name)) => branch::delete(ctx, &name),
        Command::Push(args) => remote::push(ctx, args),
        Command::Pull(args) => remote::pull(ctx, args),
        Command::Fetch => remote::fetch(),
        Command::Config(action) => config::config(ctx, action),
        Command::Log(format) => history::log(ctx, format),
        Command::Show { revision } => history::show(ctx, revision.as_deref()),
    }
}
