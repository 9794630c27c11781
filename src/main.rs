use std::{
    collections::HashSet,
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use ultimate_brainfudgit::{
    interpreter::{
        BracketPolicy, Engine, InterpreterError, MachineConfig, Runtime, DEFAULT_TAPE_LEN,
    },
    source::{self, Dialect, SourceError},
};

/// Rotated brainf**k encoder/decoder/interpreter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to operate on (.bf, .brainfuck or .ultimate_brainfuck)
    #[arg()]
    file: PathBuf,

    /// What to do, inferred from the file extension when omitted
    #[arg(value_enum)]
    commands: Vec<Commands>,

    #[arg(short, long, value_enum, default_value_t = EngineArg::JumpTable)]
    engine: EngineArg,

    #[arg(short, long, default_value_t = DEFAULT_TAPE_LEN)]
    tape_size: usize,

    /// Ignore a `]` with no matching `[` instead of stopping
    #[arg(short, long)]
    lenient_brackets: bool,

    /// Stop after this many instructions
    #[arg(short, long)]
    max_steps: Option<u64>,

    /// Only print program output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Hash, PartialEq, Eq)]
enum Commands {
    /// Output the program as read
    Tokens,
    /// Output the rotated encoding
    Encode,
    /// Output the plain program
    Decode,
    /// Run the plain program
    Run,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EngineArg {
    /// Precomputed bracket table
    JumpTable,
    /// Control stack with forward scanning
    Stack,
}

impl From<EngineArg> for Engine {
    fn from(engine: EngineArg) -> Self {
        match engine {
            EngineArg::JumpTable => Engine::JumpTable,
            EngineArg::Stack => Engine::Stack,
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
}

impl Args {
    fn machine_config(&self) -> MachineConfig {
        MachineConfig {
            tape_len: self.tape_size,
            bracket_policy: if self.lenient_brackets {
                BracketPolicy::Lenient
            } else {
                BracketPolicy::Strict
            },
            max_steps: self.max_steps,
        }
    }

    /// Plain files get encoded, rotated files get decoded and run
    fn commands(&self, dialect: Dialect) -> HashSet<Commands> {
        if !self.commands.is_empty() {
            return self.commands.iter().copied().collect();
        }
        match dialect {
            Dialect::Plain => HashSet::from([Commands::Encode]),
            Dialect::Rotated => HashSet::from([Commands::Decode, Commands::Run]),
        }
    }

    fn stage(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.blue());
        }
    }

    fn finished(&self, message: &str, now: Instant) {
        if !self.quiet {
            println!("{} {:.2?}", message.green(), now.elapsed());
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    if !args.quiet {
        println!("Running {}", args.file.display());
    }

    args.stage("Starting lexing");
    let now = Instant::now();
    let source = source::load(&args.file)?;
    args.finished(
        &format!(
            "Finished lexing {} symbols ({} dropped) from {:?} source in",
            source.program.len(),
            source.dropped,
            source.dialect
        ),
        now,
    );

    let commands = args.commands(source.dialect);

    if commands.contains(&Commands::Tokens) {
        println!("{}", source.program);
    }

    if commands.contains(&Commands::Encode) {
        args.stage("Starting encoding");
        let now = Instant::now();
        let rotated = source.rotated();
        args.finished("Finished encoding in", now);
        println!("{}", rotated);
    }

    let plain = source.plain();

    if commands.contains(&Commands::Decode) {
        args.stage("Starting decoding");
        println!("{}", plain);
    }

    if commands.contains(&Commands::Run) {
        let engine = Engine::from(args.engine);
        let config = args.machine_config();
        args.stage(&format!("Starting {:?} interpreter", engine));
        let now = Instant::now();

        let stdin = io::stdin().lock();
        let stdout = BufWriter::new(io::stdout().lock());
        let mut runtime = Runtime::new(config.tape_len, stdin, stdout)?;
        let execution = engine.run(&config, &mut runtime, &plain)?;
        // release the stdout lock before printing the summary
        drop(runtime);

        if !args.quiet {
            println!();
        }
        args.finished(&format!("Finished {} steps in", execution.steps), now);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_commands_follow_dialect() {
        let args = Args::parse_from(["ultimate-brainfudgit", "hello.bf"]);
        assert_eq!(args.commands(Dialect::Plain), HashSet::from([Commands::Encode]));
        assert_eq!(
            args.commands(Dialect::Rotated),
            HashSet::from([Commands::Decode, Commands::Run])
        );
    }

    #[test]
    fn explicit_commands_win() {
        let args = Args::parse_from(["ultimate-brainfudgit", "hello.bf", "tokens", "run"]);
        assert_eq!(
            args.commands(Dialect::Plain),
            HashSet::from([Commands::Tokens, Commands::Run])
        );
    }

    #[test]
    fn options_build_machine_config() {
        let args = Args::parse_from([
            "ultimate-brainfudgit",
            "x.ultimate_brainfuck",
            "--tape-size",
            "10",
            "--lenient-brackets",
            "--max-steps",
            "500",
            "--engine",
            "stack",
        ]);
        let config = args.machine_config();
        assert_eq!(config.tape_len, 10);
        assert_eq!(config.bracket_policy, BracketPolicy::Lenient);
        assert_eq!(config.max_steps, Some(500));
        assert_eq!(Engine::from(args.engine), Engine::Stack);
    }

    #[test]
    fn defaults_match_machine_defaults() {
        let args = Args::parse_from(["ultimate-brainfudgit", "x.bf"]);
        assert_eq!(args.machine_config(), MachineConfig::default());
        assert_eq!(Engine::from(args.engine), Engine::default());
    }
}
