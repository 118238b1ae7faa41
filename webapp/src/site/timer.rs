use std::time::Duration;

use async_trait::async_trait;

use common::runtime::Timer;

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
