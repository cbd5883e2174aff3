use crate::config::DeliveryConfig;
use crate::error::{LuckyError, Result};
use crate::transport::Transport;
use crate::types::{ChatId, SendOptions};
use std::future::Future;
use std::path::Path;

/// Paced, rate-limit aware sender on top of a [`Transport`].
pub struct Courier<T> {
    transport: T,
    config: DeliveryConfig,
}

impl<T: Transport> Courier<T> {
    pub fn new(transport: T, config: DeliveryConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    pub async fn message(&self, chat: ChatId, text: &str) -> Result<()> {
        let options = SendOptions::default();
        self.deliver("message", || {
            self.transport.send_message(chat, text, options)
        })
        .await
    }

    /// Plain text without markdown parsing.
    pub async fn plain(&self, chat: ChatId, text: &str) -> Result<()> {
        let options = SendOptions {
            markdown: false,
            silent: false,
        };
        self.deliver("message", || {
            self.transport.send_message(chat, text, options)
        })
        .await
    }

    pub async fn media(&self, chat: ChatId, media: &Path, caption: &str) -> Result<()> {
        let options = SendOptions::default();
        self.deliver("media", || {
            self.transport.send_media(chat, media, caption, options)
        })
        .await
    }

    pub async fn roll(&self, chat: ChatId, emoji: &str) -> Result<u8> {
        let options = SendOptions::default();
        self.deliver("roll", || self.transport.send_roll(chat, emoji, options))
            .await
    }

    async fn deliver<R, F, Fut>(&self, what: &str, send: F) -> Result<R>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        tokio::time::sleep(self.config.send_delay()).await;

        let mut retries = 0;
        loop {
            match send().await {
                Ok(value) => return Ok(value),
                Err(LuckyError::RateLimited { retry_after }) => {
                    if retries >= self.config.max_retries {
                        return Err(LuckyError::RetryExhausted {
                            attempts: retries,
                            last: format!("{} rate limited", what),
                        });
                    }

                    let wait = retry_after.unwrap_or_else(|| self.config.default_retry_after())
                        + self.config.retry_margin();
                    tracing::warn!(
                        "Rate limited sending {}, retrying in {:?} ({}/{})",
                        what,
                        wait,
                        retries + 1,
                        self.config.max_retries
                    );

                    tokio::time::sleep(wait).await;
                    retries += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::time::Duration;

    /// Fails with a rate limit the first `throttled` times.
    #[derive(Default)]
    struct FlakyTransport {
        throttled: u32,
        retry_after: Option<Duration>,
        calls: Mutex<u32>,
        sent: Mutex<Vec<String>>,
    }

    impl FlakyTransport {
        fn throttled(times: u32, retry_after: Option<Duration>) -> Self {
            Self {
                throttled: times,
                retry_after,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<()> {
            let mut calls = self.calls.lock();
            *calls += 1;
            if *calls <= self.throttled {
                return Err(LuckyError::rate_limited(self.retry_after));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Transport for FlakyTransport {
        async fn send_message(&self, _chat: ChatId, text: &str, _: SendOptions) -> Result<()> {
            self.check()?;
            self.sent.lock().push(text.to_string());
            Ok(())
        }

        async fn send_media(&self, _: ChatId, _: &Path, _: &str, _: SendOptions) -> Result<()> {
            Err(LuckyError::transport("media unsupported"))
        }

        async fn send_roll(&self, _chat: ChatId, _emoji: &str, _: SendOptions) -> Result<u8> {
            self.check()?;
            Ok(4)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_after_server_delay_plus_margin() {
        let courier = Courier::new(
            FlakyTransport::throttled(2, Some(Duration::from_secs(5))),
            DeliveryConfig::default(),
        );

        let started = tokio::time::Instant::now();
        courier.message(ChatId(1), "hello").await.unwrap();

        // 1s pacing + 2 * (5s + 1s margin)
        assert_eq!(started.elapsed(), Duration::from_secs(13));
        assert_eq!(*courier.transport().calls.lock(), 3);
        assert_eq!(*courier.transport().sent.lock(), vec!["hello".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_retry_after_uses_default() {
        let courier = Courier::new(FlakyTransport::throttled(1, None), DeliveryConfig::default());

        let started = tokio::time::Instant::now();
        assert_eq!(courier.roll(ChatId(1), "🎲").await.unwrap(), 4);
        assert_eq!(started.elapsed(), Duration::from_secs(1 + 30 + 1));
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let courier = Courier::new(
            FlakyTransport::throttled(10, Some(Duration::ZERO)),
            DeliveryConfig::immediate(),
        );

        let err = courier.message(ChatId(1), "hello").await.unwrap_err();
        assert!(matches!(err, LuckyError::RetryExhausted { attempts: 3, .. }));
        // first attempt plus three retries
        assert_eq!(*courier.transport().calls.lock(), 4);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let courier = Courier::new(FlakyTransport::default(), DeliveryConfig::immediate());

        let err = courier
            .media(ChatId(1), Path::new("goat.mp4"), "caption")
            .await
            .unwrap_err();
        assert!(matches!(err, LuckyError::Transport(_)));
    }
}
