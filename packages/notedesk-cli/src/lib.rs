use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};

pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.literal(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

#[cfg(test)]
mod tests {
	#[test]
	fn version_carries_build_metadata() {
		let rest = crate::VERSION
			.strip_prefix(concat!(env!("CARGO_PKG_VERSION"), "-"))
			.expect("Version must start with the package version.");
		let (sha, triple) = rest.split_once('-').expect("Version must carry a git sha.");

		assert!(!sha.is_empty());
		assert!(!triple.is_empty());
	}
}
