pub mod mock_delay;
pub mod mock_i2c;
pub mod mock_sink;
