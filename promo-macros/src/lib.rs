//! # **promo** 宏
//!
//!

use proc_macro::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, parse_macro_input};

/// 规范实体结构体定义
///
/// 1. 生成与结构体可见性一致的 id 字段。
/// 2. 添加 #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]。
/// 3. 实现 Entity 特征。
///
/// # Panics
///
/// 自定义字段出现 id 会与宏生成的字段冲突。
///
/// 仅支持具名字段的结构体。
///
/// 禁止与 #[derive] 同时使用。
#[proc_macro_attribute]
pub fn entity(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemStruct);
    let struct_name = &input.ident;
    let vis = input.vis.clone();

    if input
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("derive"))
    {
        panic!("#[entity]与#[derive]禁止同时使用");
    }

    if let Fields::Named(ref mut fields) = input.fields {
        if fields
            .named
            .iter()
            .any(|f| f.ident.as_ref().is_some_and(|i| i == "id"))
        {
            panic!("结构体`{}`已存在`id`字段", struct_name);
        }
        fields.named.insert(0, syn::parse_quote!(#[doc = "实体 Id"] #vis id: ::uuid::Uuid));
    } else {
        panic!("#[entity]仅支持具名字段的结构体");
    }

    let expanded = quote! {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #input

        impl promo::domain::Entity for #struct_name {
            #[inline(always)]
            fn id(&self) -> ::uuid::Uuid {
                self.id
            }
        }
    };

    TokenStream::from(expanded)
}

/// 规范命令结构体定义
///
/// 1. 添加 #[derive(Debug, Clone, ::serde::Deserialize)]。
#[proc_macro_attribute]
pub fn command(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let expanded = quote! {
        #[derive(Debug, Clone, ::serde::Deserialize)]
        #input
    };
    TokenStream::from(expanded)
}

/// 规范事件结构体定义
///
/// 1. 添加 #[derive(Debug, Clone, ::serde::Serialize)]。
#[proc_macro_attribute]
pub fn event(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let expanded = quote! {
        #[derive(Debug, Clone, ::serde::Serialize)]
        #input
    };
    TokenStream::from(expanded)
}
