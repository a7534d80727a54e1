//! Interactive read loop.
//!
//! Handles the shell commands (`help`, `history`, `clear`, `quit`) and hands
//! everything else to the [`ChatEngine`]. Generic over reader and writer so a
//! whole session can be driven from a test.

use std::io::{self, BufRead, Write};

use parley_chat::catalog;
use parley_chat::template::clock_label;
use parley_chat::{ChatEngine, ChatError};

const QUIT_WORDS: &[&str] = &["quit", "exit", "q"];

const HELP_TEXT: &str = "\
=== CHATBOT HELP ===
I'm a simple rule-based chatbot. Here's what I can understand:
• Greetings: hello, hi, hey, good morning
• How are you: how are you, how's it going
• About me: what's your name, how old are you
• Time/Date: what time is it, what's the date
• Weather: weather, temperature (limited responses)
• Compliments: thank you, good job, you're nice
• Goodbye: bye, goodbye, see you later
• Help: help, what can you do

Special commands:
• 'history' - View conversation history
• 'clear' - Clear conversation history
• 'quit' or 'exit' - End the conversation
";

/// What the loop should do after handling one line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct Shell<'a, R, W> {
    engine: &'a ChatEngine,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(engine: &'a ChatEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.banner()?;

        let mut line = String::new();
        loop {
            write!(self.output, "\nYou: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::info!("Input closed, ending session");
                writeln!(
                    self.output,
                    "\n\n{}: Goodbye! Thanks for chatting!",
                    self.engine.bot_name()
                )?;
                return Ok(());
            }

            if self.handle(line.trim())? == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Hello! I'm {}, your friendly chatbot!",
            self.engine.bot_name()
        )?;
        writeln!(self.output, "Type 'help' for commands, or just start chatting!")?;
        writeln!(self.output, "Type 'quit' or 'exit' to end our conversation.")?;
        writeln!(self.output, "{}", "-".repeat(50))
    }

    fn handle(&mut self, input: &str) -> io::Result<Flow> {
        if input.is_empty() {
            writeln!(self.output, "Please say something!")?;
            return Ok(Flow::Continue);
        }

        let command = input.to_lowercase();
        if QUIT_WORDS.contains(&command.as_str()) {
            self.farewell()?;
            return Ok(Flow::Stop);
        }

        match command.as_str() {
            "help" => writeln!(self.output, "\n{}", HELP_TEXT)?,
            "history" => self.show_history()?,
            "clear" => match self.engine.clear() {
                Ok(()) => writeln!(self.output, "Conversation history cleared!")?,
                Err(e) => self.report(&e)?,
            },
            _ => match self.engine.reply(input) {
                Ok(reply) => writeln!(self.output, "{}: {}", self.engine.bot_name(), reply)?,
                Err(e) => self.report(&e)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn farewell(&mut self) -> io::Result<()> {
        let reply = match self.engine.sample(catalog::GOODBYE) {
            Ok(reply) => reply,
            // Custom tables need not define a goodbye category.
            Err(ChatError::UnknownCategory(_)) => "Goodbye!".to_string(),
            Err(e) => {
                self.report(&e)?;
                "Goodbye!".to_string()
            }
        };
        writeln!(self.output, "\n{}: {}", self.engine.bot_name(), reply)
    }

    fn show_history(&mut self) -> io::Result<()> {
        let history = match self.engine.history() {
            Ok(h) => h,
            Err(e) => return self.report(&e),
        };
        if history.is_empty() {
            return writeln!(self.output, "No conversation history yet!");
        }

        writeln!(self.output, "\n=== CONVERSATION HISTORY ===")?;
        for (i, exchange) in history.iter().enumerate() {
            writeln!(self.output, "{}. [{}]", i + 1, clock_label(exchange.timestamp))?;
            writeln!(self.output, "   You: {}", exchange.input)?;
            writeln!(self.output, "   Bot: {}", exchange.reply)?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        tracing::warn!(error = %err, "Turn failed");
        writeln!(self.output, "An error occurred: {}", err)?;
        writeln!(self.output, "Let's continue our conversation!")
    }
}
