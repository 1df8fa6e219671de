//! Dispatch parsed commands to board operations

use crate::cli::{ColumnCommands, Commands, StatsCommands, TaskCommands, UserCommands};
use crate::error::CliResult;
use serde_json::Value;
use taskboard::column::{AddColumn, GetColumn, ListColumns, UpdateColumn};
use taskboard::stats::WeeklyStatsCommand;
use taskboard::task::{AddTask, AssignTask, DeleteTask, GetTask, ListTasks, MoveTask, UpdateTask};
use taskboard::user::{GetUser, ListUsers};
use taskboard::{
    BoardContext, BoardOperationProcessor, Execute, Operation, OperationProcessor, TaskboardError,
};

/// Run one command against the board and return its JSON result
pub fn run_command(
    command: Commands,
    processor: &BoardOperationProcessor,
    ctx: &mut BoardContext,
) -> CliResult<Value> {
    let mut run = Runner { processor, ctx };

    match command {
        Commands::Task { action } => match action {
            TaskCommands::Add {
                column,
                title,
                description,
                assign,
            } => {
                let mut op = AddTask::new(column, title);
                op.description = description;
                op.assigned_to = assign.map(Into::into);
                run.op(&op)
            }
            TaskCommands::Update {
                id,
                title,
                description,
            } => {
                let mut op = UpdateTask::new(id);
                op.title = title;
                op.description = description;
                run.op(&op)
            }
            TaskCommands::Assign { id, user } => match user {
                Some(user) => run.op(&AssignTask::new(id, user)),
                None => run.op(&AssignTask::unassign(id)),
            },
            TaskCommands::Delete { id } => run.op(&DeleteTask::new(id)),
            TaskCommands::Move { id, column, index } => match index {
                Some(index) => run.op(&MoveTask::new(id, column, index)),
                None => run.op(&MoveTask::to_end(id, column)),
            },
            TaskCommands::Get { id } => run.op(&GetTask::new(id)),
            TaskCommands::List { column } => match column {
                Some(column) => run.op(&ListTasks::in_column(column)),
                None => run.op(&ListTasks::new()),
            },
        },
        Commands::Column { action } => match action {
            ColumnCommands::Add { title } => run.op(&AddColumn::new(title)),
            ColumnCommands::Update { id, title } => run.op(&UpdateColumn::new(id, title)),
            ColumnCommands::Get { id } => run.op(&GetColumn::new(id)),
            ColumnCommands::List => run.op(&ListColumns::new()),
        },
        Commands::User { action } => match action {
            UserCommands::Get { id } => run.op(&GetUser::new(id)),
            UserCommands::List => run.op(&ListUsers::new()),
        },
        Commands::Stats { action } => match action {
            StatsCommands::Week { now } => run.op(&WeeklyStatsCommand { now }),
        },
    }
}

struct Runner<'a> {
    processor: &'a BoardOperationProcessor,
    ctx: &'a mut BoardContext,
}

impl Runner<'_> {
    fn op<O>(&mut self, operation: &O) -> CliResult<Value>
    where
        O: Operation + Execute<BoardContext, TaskboardError>,
    {
        tracing::debug!(op = %operation.op_string(), "running command");
        Ok(self.processor.process(operation, self.ctx)?)
    }
}
