use std::io::{Write, BufRead};
use log::{debug, info};

pub mod error;
pub mod num;
pub mod ops;
pub mod stack;

use error::{Error, Result};
use ops::{BinOp, Cmd, CmdSig, UnOp};
use stack::Stack;

///Bundled state storage for one calculator session
pub struct State {
	///main stack
	stk: Stack,
	///cleared by `q`, ends the session
	running: bool,
	///digits after the decimal point when printing
	prec: usize
}
impl Default for State {
	///Empty stack, running, six fractional digits like `printf("%f")`.
	fn default() -> Self {
		Self {
			stk: Stack::new(),
			running: true,
			prec: 6
		}
	}
}
impl State {
	///custom output precision
	pub fn custom_prec(mut self, prec: usize) -> Self {
		self.prec = prec;
		self
	}
	///preload the stack, bottom value first
	pub fn custom_stack(mut self, vals: Vec<f64>) -> Self {
		self.stk = Stack::from(vals);
		self
	}

	pub fn stack(&self) -> &Stack {&self.stk}
	pub fn running(&self) -> bool {self.running}

	///run one command, printing commands write to `out`
	fn apply(&mut self, cmd: Cmd, out: &mut dyn Write) -> std::io::Result<Result<()>> {
		match cmd {
			Cmd::Bin(op) => {return Ok(self.binary(op));},
			Cmd::Un(op) => {return Ok(self.unary(op));},
			Cmd::Print => match self.stk.peek() {
				Ok(a) => {writeln!(out, "{}", fmt_num(a, self.prec))?;},
				Err(e) => {return Ok(Err(e));}
			},
			Cmd::Dump => {
				for a in self.stk.snapshot() {
					writeln!(out, "{}", fmt_num(a, self.prec))?;
				}
			},
			Cmd::Dup => match self.stk.peek() {
				Ok(a) => {self.stk.push(a);},
				Err(e) => {return Ok(Err(e));}
			},
			Cmd::Clear => {self.stk.clear();},
			Cmd::Quit => {
				info!("quit requested");
				self.running = false;
			}
		}
		Ok(Ok(()))
	}

	///stack is untouched unless both values are present
	fn binary(&mut self, op: BinOp) -> Result<()> {
		self.stk.require(CmdSig::AnBn.adicity())?;
		let a = self.stk.pop()?;	//top binds to the first operand
		let b = self.stk.pop()?;
		self.stk.push(op.apply(a, b));
		Ok(())
	}

	fn unary(&mut self, op: UnOp) -> Result<()> {
		let a = self.stk.pop()?;
		self.stk.push(op.apply(a));
		Ok(())
	}
}

///fixed-point output, non-finite values spelled like glibc's printf
fn fmt_num(n: f64, prec: usize) -> String {
	let sign = if n.is_sign_negative() {"-"} else {""};
	if n.is_nan() {format!("{sign}nan")}
	else if n.is_infinite() {format!("{sign}inf")}
	else {format!("{n:.prec$}")}
}

///Splits a line at single spaces.
///
///Consecutive spaces produce empty tokens, a trailing space does not.
pub fn tokens(line: &str) -> Vec<&str> {
	let mut words = Vec::new();
	let mut start = 0;
	for (i, c) in line.char_indices() {
		if c == ' ' {
			words.push(&line[start..i]);
			start = i + 1;
		}
	}
	if start < line.len() {
		words.push(&line[start..]);	//last word needs no delimiter
	}
	words
}

///Bundle of generic IO streams, for brevity.
pub struct IOTriple<'a> {
	pub input: &'a mut dyn BufRead,
	pub output: &'a mut dyn Write,
	pub error: &'a mut dyn Write
}
#[macro_export]
///Default IO triple using stdin, stdout, stderr
macro_rules! stdio {
	() => {
		::psc::IOTriple {
			input: &mut ::std::io::BufReader::new(::std::io::stdin()),
			output: &mut ::std::io::stdout(),
			error: &mut ::std::io::stderr()
		}
	}
}

///Evaluates one line of input on the given state.
///
///Every token is looked up as a command first and parsed as a number otherwise.
///A failing token is reported on `io.error` as `psc: "<token>": <message>` and evaluation
///goes on with the next one. After `q` the rest of the line is ignored.
///
///Terminates with `Err` only if a write on an IO stream fails.
pub fn exec(st: &mut State, io: &mut IOTriple, line: &str) -> std::io::Result<()> {
	for word in tokens(line) {
		if !st.running {break;}
		let res = match ops::lookup(word) {
			Some(cmd) => {
				debug!("{word:?}: command {cmd:?}");
				st.apply(cmd, io.output)?
			},
			None => {
				debug!("{word:?}: number");
				num::push_num(&mut st.stk, word).map_err(Error::from)
			}
		};
		if let Err(e) = res {
			writeln!(io.error, "psc: {word:?}: {e}")?;
		}
	}
	Ok(())
}

///Reads lines from `io.input` and evaluates them until `q` or end of input.
///
///Terminates with `Err` only if a read/write on an IO stream fails.
pub fn run(st: &mut State, io: &mut IOTriple) -> std::io::Result<()> {
	let mut buf = Vec::new();
	while st.running {
		buf.clear();
		if io.input.read_until(b'\n', &mut buf)? == 0 {
			debug!("end of input");
			break;
		}
		let line = String::from_utf8_lossy(&buf);	//bad bytes become U+FFFD and fail as digits
		let l = line.strip_suffix('\n').unwrap_or(&line);
		let l = l.strip_suffix('\r').unwrap_or(l);
		exec(st, io, l)?;
		io.output.flush()?;
	}
	Ok(())
}
