pub mod contact;

// endpoint helpers
//
// each endpoint is a POST of the json-encoded request struct to {root}/{Name}, where the
// root is supplied by the site configuration since the contact service is not ours.  a
// non-2xx response is turned into an error carrying the response body
#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](root: &str, req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let url = format!("{}/{}", root.trim_end_matches('/'), stringify!([<$name:camel>]));

                let resp = gloo_net::http::Request::post(url.as_str())
                    .json(&req.clone())?
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}
