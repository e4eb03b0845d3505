// Domain layer: 祝日資料模型與管線介面（ports），不依賴具體的 IO 實作。

pub mod model;
pub mod ports;
