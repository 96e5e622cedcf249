pub(crate) mod identity;

pub(crate) use identity::Identity;
