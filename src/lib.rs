// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

pub mod constants;
pub mod context;
pub mod element;
pub mod emitter;
pub mod error;
pub mod options;
pub mod scope;
pub mod sink;
