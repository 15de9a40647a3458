// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

pub mod content;
pub mod games;
pub mod health;
pub mod messaging;
pub mod notifications;
pub mod payments;
pub mod profiles;
pub mod social;
pub mod subscriptions;
pub mod users;
