//! 运行时生命周期：启动准备、初始数据与优雅退出

pub mod lifetime;
pub mod seed;
