use psc::State;

fn main() {
	env_logger::builder().format_timestamp(None).init();	//silent unless RUST_LOG is set

	let mut st = State::default();
	if let Err(err) = psc::run(&mut st, &mut psc::stdio!()) {
		eprintln!("psc: {err}");
		std::process::exit(1);
	}
}
