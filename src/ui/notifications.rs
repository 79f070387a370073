use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_QUEUED: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
	Info,
	Error,
}

/// Short-lived message shown in the status bar.
#[derive(Debug, Clone)]
pub struct Notification {
	pub message: String,
	pub level: NoticeLevel,
	expires_at: Instant,
}

/// Queue of transient notifications. The newest one is displayed.
#[derive(Debug, Clone)]
pub struct Notifications {
	items: VecDeque<Notification>,
	ttl: Duration,
}

impl Notifications {
	#[must_use]
	pub fn new(ttl: Duration) -> Self {
		Self {
			items: VecDeque::new(),
			ttl,
		}
	}

	pub fn info(&mut self, message: impl Into<String>) {
		self.push(message.into(), NoticeLevel::Info, Instant::now());
	}

	pub fn error(&mut self, message: impl Into<String>) {
		self.push(message.into(), NoticeLevel::Error, Instant::now());
	}

	fn push(&mut self, message: String, level: NoticeLevel, now: Instant) {
		if self.items.len() == MAX_QUEUED {
			self.items.pop_front();
		}
		self.items.push_back(Notification {
			message,
			level,
			expires_at: now + self.ttl,
		});
	}

	/// Drop notifications that expired before `now`.
	pub fn prune(&mut self, now: Instant) {
		self.items.retain(|item| item.expires_at > now);
	}

	#[must_use]
	pub fn current(&self) -> Option<&Notification> {
		self.items.back()
	}

	pub fn clear(&mut self) {
		self.items.clear();
	}
}
