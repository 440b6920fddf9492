// SPDX-License-Identifier: MPL-2.0
use photo_lens::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        library_dir: args
            .opt_value_from_str::<_, PathBuf>("--library-dir")
            .unwrap_or(None),
        photo_paths: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .map(PathBuf::from)
            .collect(),
    };

    app::run(flags)
}
