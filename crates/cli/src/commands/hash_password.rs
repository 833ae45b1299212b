// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cj hash-password <plain>`

use clap::Args;

#[derive(Args)]
pub struct HashPasswordArgs {
    /// Plaintext password
    pub plain: String,
}

pub fn hash_password(args: HashPasswordArgs) {
    println!("{}", cj_core::hash_password(&args.plain));
}
