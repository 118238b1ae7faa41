use std::rc::Rc;

use async_trait::async_trait;
use tracing::debug;

use api::contact::{ContactMessage, SendContactReq, send_contact};
use common::{
    config::{ContactConfig, SiteConfig},
    contact::{ContactTransport, SimulatedTransport},
};

use crate::site::timer::GlooTimer;

// hands the message to an external contact service
pub struct HttpTransport {
    endpoint_root: String,
}

#[async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn send(&self, message: &ContactMessage) -> anyhow::Result<()> {
        send_contact(
            &self.endpoint_root,
            &SendContactReq {
                contact: message.clone(),
            },
        )
        .await?;

        Ok(())
    }
}

// the transport the contact form uses, shared through the context
#[derive(Clone)]
pub struct SiteTransport(Rc<dyn ContactTransport>);

impl SiteTransport {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.contact {
            ContactConfig::Simulated => {
                debug!("using simulated contact transport");
                SiteTransport(Rc::new(SimulatedTransport::new(
                    GlooTimer,
                    config.timing.submit_delay(),
                )))
            }
            ContactConfig::Http { endpoint_root } => {
                debug!("sending contact messages to {endpoint_root}");
                SiteTransport(Rc::new(HttpTransport {
                    endpoint_root: endpoint_root.clone(),
                }))
            }
        }
    }

    pub fn get(&self) -> &dyn ContactTransport {
        self.0.as_ref()
    }
}
