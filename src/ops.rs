use phf::phf_map;

///argument signatures of commands
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CmdSig {
	Nil,
	An,
	AnBn
}
use CmdSig::*;
impl CmdSig {
	#[inline(always)]
	///aka argument count
	pub fn adicity(&self) -> usize {
		match self {
			Nil => 0,
			An => 1,
			AnBn => 2
		}
	}
}

///one value in, one value out
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnOp {
	Sqrt,
	Round,
	Floor,
	Fract,
	Recip,
	Neg
}
impl UnOp {
	pub fn apply(&self, a: f64) -> f64 {
		match self {
			UnOp::Sqrt => a.sqrt(),
			UnOp::Round => a.round(),	//half away from zero
			UnOp::Floor => a.floor(),
			UnOp::Fract => a - a.floor(),
			UnOp::Recip => 1.0 / a,
			UnOp::Neg => -a
		}
	}
}

///two values in, one value out
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinOp {
	Add,
	Sub,
	Mul,
	Div,
	Pow
}
impl BinOp {
	///`a` is the value that was on top
	pub fn apply(&self, a: f64, b: f64) -> f64 {
		match self {
			BinOp::Add => a + b,
			BinOp::Sub => a - b,
			BinOp::Mul => a * b,
			BinOp::Div => a / b,
			BinOp::Pow => a.powf(b)
		}
	}
}

///every command the calculator knows
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cmd {
	Un(UnOp),
	Bin(BinOp),
	Print,
	Dump,
	Dup,
	Clear,
	Quit
}
use Cmd::*;
impl Cmd {
	pub fn sig(&self) -> CmdSig {
		match self {
			Bin(_) => AnBn,
			Un(_) => An,
			Print|Dump|Dup|Clear|Quit => Nil
		}
	}
}

///token spellings, symbol and word alias map to the same command
static CMDS: phf::Map<&'static str, Cmd> = phf_map! {
	"+" => Bin(BinOp::Add), "add" => Bin(BinOp::Add),
	"-" => Bin(BinOp::Sub), "sub" => Bin(BinOp::Sub),
	"*" => Bin(BinOp::Mul), "mul" => Bin(BinOp::Mul),
	"/" => Bin(BinOp::Div), "div" => Bin(BinOp::Div),
	"v" => Un(UnOp::Sqrt), "sqrt" => Un(UnOp::Sqrt),
	"^" => Bin(BinOp::Pow), "pow" => Bin(BinOp::Pow),
	"~" => Un(UnOp::Round), "round" => Un(UnOp::Round),
	"fl" => Un(UnOp::Floor),
	"fr" => Un(UnOp::Fract),
	"rcp" => Un(UnOp::Recip),
	"_" => Un(UnOp::Neg), "neg" => Un(UnOp::Neg),
	"=" => Print,
	"dump" => Dump,
	"d" => Dup,
	"c" => Clear,
	"q" => Quit,
};

///Looks up a token in the command table.
///
///Commands take precedence over number literals, so a new spelling that is also a valid
///literal (e.g. `b1`) would shadow that number.
pub fn lookup(word: &str) -> Option<Cmd> {
	CMDS.get(word).copied()
}
