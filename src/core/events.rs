use bevy::prelude::*;

/// 面向玩家的一行文字反馈,由 main 统一打印
#[derive(Event)]
pub struct LogEvent(pub String);

pub fn hello_world(mut writer: EventWriter<LogEvent>) {
    writer.write(LogEvent("输入 help 查看命令".into()));
}
