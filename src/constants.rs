#[macro_export]
macro_rules! env_lazy {
    ($( $vis:vis $name:ident : $ty:ty = ($key:literal, $default:expr); )* ) => {
        $(
            $vis static $name: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| {
                $crate::libs::config::load_env();
                $crate::libs::config::Config::get_var_t::<$ty>($key, $default)
            });
        )*
    };
}

env_lazy! {
    pub DEBUG_LOGS: bool = ("DEBUG_LOGS", false);
}

/// Registry interface artifact, relative to the working directory.
pub const ABI_PATH: &str = "ABI.json";

pub const NATIVE_SYMBOL: &str = "ETH";
pub const NATIVE_DECIMALS: u8 = 18;
/// Fraction digits shown for balances.
pub const DISPLAY_DECIMALS: u8 = 3;
