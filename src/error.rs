use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("price fetch failed for {symbol}: {source}")]
    PriceFetch {
        symbol: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("quote endpoint returned {status} for {symbol}: {body}")]
    QuoteStatus {
        symbol: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("sink '{sink}' failed to deliver: {cause}")]
    SinkSend { sink: String, cause: String },
}
