use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, FnArg, GenericArgument, Ident, ItemFn, Pat, PathArguments,
    Signature, Type,
};

/// Transform an asynchronous test into a synchronous one, inject dependencies,
/// and ensure that the database is dropped regardless of how the test terminates.
///
/// Injectable dependencies are [`rocket::local::asynchronous::Client`],
/// [`mongodb::Database`], and `crate::model::mongodb::Coll<T>`, in any order.
/// Every test gets its own freshly seeded database.
#[proc_macro_attribute]
pub fn backend_test(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    // Extract type information and reject invalid function signatures.
    let Injected {
        args,
        collection_idents,
        collection_types,
    } = match check_sig(&item_fn.sig) {
        Ok(injected) => injected,
        Err(err) => {
            return err.into_compile_error().into();
        }
    };

    // Rename the future so the test can have its original name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_fut", name);
    item_fn.sig.ident = new_name.clone();

    // Rewrite the test function.
    quote! {
        #[test]
        fn #name() {
            /// Test setup.
            async fn setup() -> (rocket::local::asynchronous::Client, mongodb::Database) {
                log4rs_test_utils::test_logging::init_logging_once_for(
                    ["votewise_backend"],
                    None,
                    None,
                );
                let db_client = crate::db_client().await;
                let db_name = crate::database();
                let rocket_client = rocket::local::asynchronous::Client::tracked(
                    crate::rocket_for_db(db_client.clone(), &db_name),
                )
                .await
                .unwrap();
                let db = db_client.database(&db_name);
                (rocket_client, db)
            }

            /// The test itself.
            #item_fn

            /// Test cleanup.
            async fn cleanup(db: mongodb::Database) {
                db.drop(None).await.unwrap();
            }

            // Create an async runtime. We need a separate one for inside and
            // outside the `catch_unwind`.
            let outer_runtime = rocket::tokio::runtime::Builder::new_multi_thread()
                .thread_name("test-setup-cleanup")
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();
            let inner_runtime = rocket::tokio::runtime::Builder::new_multi_thread()
                .thread_name("rocket-worker-test-thread")
                .worker_threads(2)
                .enable_all()
                .build()
                .unwrap();

            // Run the setup.
            let (rocket_client, db) = outer_runtime.block_on(setup());

            // Run the test, catching any panics.
            // Use mutexes to safely transfer `!UnwindSafe` data.
            let client_mutex = std::sync::Mutex::new(rocket_client);
            let db_mutex = std::sync::Mutex::new(db.clone());
            let runtime_mutex = std::sync::Mutex::new(inner_runtime);
            let result = std::panic::catch_unwind(|| {
                let rocket_client = client_mutex.into_inner().unwrap();
                let db = db_mutex.into_inner().unwrap();
                let runtime = runtime_mutex.into_inner().unwrap();

                #(
                    let #collection_idents = crate::model::mongodb::Coll::<#collection_types>::from_db(&db);
                )*

                runtime.block_on(#new_name(#(#args),*));
            });

            // Run the cleanup.
            outer_runtime.block_on(cleanup(db));

            // If the test panicked, re-raise the panic.
            if let Err(cause) = result {
                std::panic::resume_unwind(cause);
            }
        }
    }
    .into()
}

/// What to pass to the wrapped test, in parameter order, and which
/// collections to construct for it.
struct Injected {
    args: Vec<TokenStream2>,
    collection_idents: Vec<Ident>,
    collection_types: Vec<Ident>,
}

/// Ensure the wrapped test is async, extract parameters to inject, and reject unknown parameters.
fn check_sig(sig: &Signature) -> Result<Injected, syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new(sig.span(), "Test must be marked `async`"));
    }

    let mut has_client = false;
    let mut has_db = false;
    let mut injected = Injected {
        args: vec![],
        collection_idents: vec![],
        collection_types: vec![],
    };

    for input in &sig.inputs {
        if let Some(arg) = injectable(input) {
            match arg {
                Injectable::Client => {
                    if has_client {
                        return Err(syn::Error::new(
                            input.span(),
                            "Test cannot accept more than one `rocket::local::asynchronous::Client`",
                        ));
                    }
                    has_client = true;
                    injected.args.push(quote! { rocket_client });
                }
                Injectable::Database => {
                    if has_db {
                        return Err(syn::Error::new(
                            input.span(),
                            "Test cannot accept more than one `mongodb::Database`",
                        ));
                    }
                    has_db = true;
                    injected.args.push(quote! { db.clone() });
                }
                Injectable::Collection(ident, ty) => {
                    injected.args.push(quote! { #ident });
                    injected.collection_idents.push(ident);
                    injected.collection_types.push(ty);
                }
            }
            continue;
        }

        return Err(syn::Error::new(
            input.span(),
            "Expected one of `client_ident: Client`, `db_ident: Database` or `collection_ident: Coll<T>`",
        ));
    }

    Ok(injected)
}

enum Injectable {
    Client,
    Database,
    Collection(Ident, Ident),
}

/// Classify a test parameter, or `None` if it can't be injected.
fn injectable(input: &FnArg) -> Option<Injectable> {
    let FnArg::Typed(pat_type) = input else {
        return None;
    };
    let Pat::Ident(pat_ident) = &*pat_type.pat else {
        return None;
    };
    let Type::Path(type_path) = &*pat_type.ty else {
        return None;
    };

    if let Some(type_ident) = type_path.path.get_ident() {
        return if type_ident == "Client" {
            Some(Injectable::Client)
        } else if type_ident == "Database" {
            Some(Injectable::Database)
        } else {
            None
        };
    }

    // Valid as the last path segment for any type is itself
    let possible_collection = type_path.path.segments.last()?;
    if possible_collection.ident != "Coll" {
        return None;
    }
    let PathArguments::AngleBracketed(generics) = &possible_collection.arguments else {
        return None;
    };
    let Some(GenericArgument::Type(Type::Path(type_path))) = generics.args.first() else {
        return None;
    };
    let type_ident = type_path.path.get_ident()?;
    Some(Injectable::Collection(
        pat_ident.ident.clone(),
        type_ident.clone(),
    ))
}
