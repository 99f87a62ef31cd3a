//! 指し手生成のテスト

mod pieces;
