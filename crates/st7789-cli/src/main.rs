use miette::Result;

mod actions;
mod args;

fn main() -> Result<()> {
	let (args, _guard) = args::get_args()?;
	actions::run(args)
}
