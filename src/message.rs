// Vortarkivo – A themed word search game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::time::Duration;
use serde::Serialize;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

pub const STRAIGHT_LINE_TEXT: &str =
    "Выбор должен осуществляться по прямой линии";
pub const NOT_IN_THEME_TEXT: &str = "Данного слова нет в текущей теме";
pub const LEVEL_COMPLETE_TEXT: &str = "Ура! Уровень пройден!";
pub const GAME_COMPLETE_TEXT: &str =
    "Поздравляем! Все слова восстановлены, а заклинания снова активны. \
     Великий Архив вновь сияет магическим знанием, и теперь вы можете \
     считать себя полноценным хранителем тайн Академии.";

pub fn found_text(word: &str) -> String {
    format!("Найдено: {}!", word)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Success,
    Error,
    LevelComplete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    // Increases with every message shown so that a dismissal
    // scheduled for an older message can be recognised
    pub generation: u64,
}

// Holds the message currently on display.
#[derive(Debug, Clone)]
pub struct MessageBoard {
    current: Option<Message>,
    next_generation: u64,
    timeout: Duration,
}

impl MessageBoard {
    pub fn new(timeout: Duration) -> MessageBoard {
        MessageBoard {
            current: None,
            next_generation: 0,
            timeout,
        }
    }

    // Replaces the current message.
    pub fn show(&mut self, text: String, severity: Severity) -> &Message {
        let generation = self.next_generation;
        self.next_generation += 1;

        log::debug!("message {} ({:?}): {}", generation, severity, text);

        self.current.insert(Message { text, severity, generation })
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    // How long a message should stay visible before the caller
    // passes its generation to `MessageBoard::dismiss`. `None`
    // means it stays until the board is cleared.
    pub fn timeout(&self, severity: Severity) -> Option<Duration> {
        match severity {
            Severity::Success | Severity::Error => Some(self.timeout),
            Severity::LevelComplete => None,
        }
    }

    // Hides the message with the given generation. Does nothing if
    // another message has replaced it or if it isn’t one that times
    // out. Returns whether the message was hidden.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match self.current {
            Some(Message { generation: g, severity, .. })
                if g == generation && severity != Severity::LevelComplete =>
            {
                self.current = None;
                true
            },
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for MessageBoard {
    fn default() -> MessageBoard {
        MessageBoard::new(DEFAULT_TIMEOUT)
    }
}
