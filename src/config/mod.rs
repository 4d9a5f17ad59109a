mod run;

pub(crate) use run::Config;
