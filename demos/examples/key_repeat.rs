// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve keys against keyboard state and drive them through the dispatcher.
//!
//! This example shows how to combine:
//! - `understory_key_data` to resolve layout keys with a `ComputingEvaluator`,
//! - `understory_key_dispatch` to turn pointer presses into down/repeat/up/cancel events.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_key_demos --example key_repeat`

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_key_data::{
    AutoTextKeyData, ComputingEvaluator, KeyCode, KeyData, KeyType, KeyboardState, TextKeyData,
};
use understory_key_dispatch::{DispatchConfig, Dispatcher, InputKeyEvent, PointerId};

/// Keyboard context: shift state plus the currency symbol of the active locale.
struct Context {
    state: KeyboardState,
    currency: char,
}

impl ComputingEvaluator for Context {
    fn active_state(&self) -> KeyboardState {
        self.state
    }

    fn is_slot(&self, data: &KeyData) -> bool {
        data.code() == KeyCode::CURRENCY_SLOT_1
    }

    fn slot_data(&self, data: &KeyData) -> Option<KeyData> {
        (data.code() == KeyCode::CURRENCY_SLOT_1).then(|| {
            KeyData::Text(TextKeyData::new(
                KeyType::Character,
                KeyCode::from_char(self.currency),
                self.currency.to_string(),
            ))
        })
    }
}

/// Resolve `key` in `context`, falling back to nothing for empty slots.
fn resolve(key: &KeyData, context: &Context) -> Option<Arc<KeyData>> {
    let resolved = key.compute(context)?;
    println!(
        "  {:<12} -> display {:?}, emits {:?}",
        key.label(),
        resolved.as_string(true),
        resolved.as_string(false)
    );
    Some(Arc::new(resolved.into_owned()))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let layout: Vec<KeyData> = vec![
        AutoTextKeyData::new(KeyType::Character, KeyCode::from_char('q'), "q").into(),
        TextKeyData::new(KeyType::Character, KeyCode::CURRENCY_SLOT_1, "currency_slot_1").into(),
        KeyData::Text(TextKeyData::DELETE),
    ];

    let config = match DispatchConfig::from_toml_str(
        r#"
        [repeat]
        delay_ms = 200
        interval_ms = 40
        "#,
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    let dispatcher = match Dispatcher::new(
        tokio::runtime::Handle::current(),
        config,
        |event: &InputKeyEvent| {
            println!(
                "  event {:?} {:?}",
                event.action(),
                event.data().as_string(true)
            );
        },
    ) {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    for context in [
        Context {
            state: KeyboardState::empty(),
            currency: '$',
        },
        Context {
            state: KeyboardState::SHIFT_MANUAL,
            currency: '€',
        },
    ] {
        tracing::info!(state = ?context.state, "resolving layout");
        let keys: Vec<_> = layout.iter().filter_map(|k| resolve(k, &context)).collect();

        let Some(first) = PointerId::new(1) else {
            return;
        };
        let Some(second) = PointerId::new(2) else {
            return;
        };
        let one = dispatcher.pointer(first);
        let two = dispatcher.pointer(second);

        // Tap the letter, hold delete long enough to repeat, and abandon the currency key.
        one.press(Arc::clone(&keys[0]));
        one.release();
        two.press(Arc::clone(&keys[2]));
        tokio::time::sleep(Duration::from_millis(300)).await;
        two.release();
        one.press(Arc::clone(&keys[1]));
        tokio::time::sleep(Duration::from_millis(50)).await;
        one.cancel();
    }

    dispatcher.shutdown();
}
