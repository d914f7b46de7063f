use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Plotly figure: trace list plus layout, ready for `Plotly.react`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn title(&self) -> Option<&str> {
        self.layout.pointer("/title/text").and_then(Value::as_str)
    }
}
