use log::trace;
use crate::error::{Error, Result};

///LIFO of values, top is the end of the vec
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack(Vec<f64>);
impl Stack {
	pub const fn new() -> Self {
		Self(Vec::new())
	}

	///push always succeeds, growth is unbounded
	pub fn push(&mut self, val: f64) {
		trace!("push {val}");
		self.0.push(val);
	}

	///remove and return the top value
	pub fn pop(&mut self) -> Result<f64> {
		self.0.pop().ok_or(Error::StackEmpty)
	}

	///top value without removing it
	pub fn peek(&self) -> Result<f64> {
		self.0.last().copied().ok_or(Error::StackEmpty)
	}

	///fails without touching the stack unless at least `n` values are present
	pub fn require(&self, n: usize) -> Result<()> {
		if self.0.len() < n {Err(Error::StackEmpty)} else {Ok(())}
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}

	///values from top to bottom, taken from a copy so the stack may change meanwhile
	pub fn snapshot(&self) -> impl Iterator<Item = f64> {
		self.0.clone().into_iter().rev()
	}

	pub fn len(&self) -> usize {self.0.len()}
	pub fn is_empty(&self) -> bool {self.0.is_empty()}
}
impl From<Vec<f64>> for Stack {
	///bottom value first
	fn from(v: Vec<f64>) -> Self {
		Self(v)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pop_and_peek_on_empty() {
		let mut s = Stack::new();
		assert_eq!(s.pop(), Err(Error::StackEmpty));
		assert_eq!(s.peek(), Err(Error::StackEmpty));
		assert!(s.is_empty());
	}

	#[test]
	fn peek_leaves_value() {
		let mut s = Stack::new();
		s.push(1.0);
		s.push(2.0);
		assert_eq!(s.peek(), Ok(2.0));
		assert_eq!(s.len(), 2);
		assert_eq!(s.pop(), Ok(2.0));
		assert_eq!(s.peek(), Ok(1.0));
	}

	#[test]
	fn require_counts_values() {
		let s = Stack::from(vec![1.0]);
		assert!(s.require(1).is_ok());
		assert_eq!(s.require(2), Err(Error::StackEmpty));
	}

	#[test]
	fn snapshot_is_top_first_and_detached() {
		let mut s = Stack::from(vec![1.0, 2.0, 3.0]);
		let snap = s.snapshot();
		s.clear();
		assert_eq!(snap.collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);
		assert!(s.is_empty());
	}
}
