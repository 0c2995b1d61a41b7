use std::io::{BufRead, Write};

use crate::libs::eth::spells::{Balance, NodeData};
use crate::libs::eth::QueryError;
use crate::libs::lookup::save_log_to_file;
use crate::libs::writing::{cc, Console};
use netsepio::display_value;

/// The two reads the menu can dispatch to.
#[allow(async_fn_in_trait)]
pub trait NodeQueries {
    async fn account_balance(&self, address: &str) -> Result<Balance, QueryError>;
    async fn node_data(&self, node_id: &str) -> Result<NodeData, QueryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    Balance,
    NodeData,
    /// Anything else, including input that is not an integer.
    Unknown,
}

impl MenuOption {
    /// Only the first whitespace separated token of `line` counts.
    pub fn parse(line: &str) -> Self {
        match first_token(line).parse::<i64>() {
            Ok(0) => Self::Exit,
            Ok(1) => Self::Balance,
            Ok(2) => Self::NodeData,
            _ => Self::Unknown,
        }
    }
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

fn farewell<R: BufRead, W: Write>(console: &mut Console<R, W>) {
    console.print("Exiting...");
    console.cprint("Thank you for using the NetSepio node reader", cc::LIGHT_GREEN);
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, what: &str, err: &QueryError) {
    save_log_to_file(&format!("[menu] {what}: {err}"));
    console.err_print(&format!("{what} failed: {err}"));
}

/// Prompt until the user picks `0` or input runs out.  A failed query is
/// reported and the loop carries on.
pub async fn run_menu<Q, R, W>(queries: &Q, console: &mut Console<R, W>)
where
    Q: NodeQueries,
    R: BufRead,
    W: Write,
{
    loop {
        console.print("\nHey you are in a blockchain app, where you can do the following: ");
        console.cprint("\n1. Get account balance\n2. Read the node data\n0. Exit", cc::CYAN);
        let Some(line) = console.cinput("\nEnter the option: ", cc::BOLD) else {
            farewell(console);
            break;
        };

        match MenuOption::parse(&line) {
            MenuOption::Exit => {
                farewell(console);
                break;
            }
            MenuOption::Balance => {
                let Some(address) = console.cinput("Enter the address: ", cc::BOLD) else {
                    farewell(console);
                    break;
                };
                match queries.account_balance(first_token(&address)).await {
                    Ok(balance) => {
                        console.print(&format!("{} wei", balance.wei));
                        console.cprint(&balance.to_string(), cc::LIGHT_GREEN);
                    }
                    Err(e) => report(console, "balance query", &e),
                }
            }
            MenuOption::NodeData => {
                let Some(node_id) = console.cinput("Enter the node id: ", cc::BOLD) else {
                    farewell(console);
                    break;
                };
                let node_id = first_token(&node_id);
                console.print(&format!("Reading node data for ID: {node_id}..."));
                match queries.node_data(node_id).await {
                    Ok(node) => {
                        console.cprint(&format!("Node data: {}", node.hex()), cc::LIGHT_GREEN);
                        for (name, value) in node.fields.iter().flatten() {
                            console.print(&format!("  {name}: {}", display_value(value)));
                        }
                    }
                    Err(e) => report(console, "node read", &e),
                }
            }
            MenuOption::Unknown => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::dyn_abi::DynSolValue;
    use alloy::primitives::{Bytes, U256};
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl NodeQueries for Recorder {
        async fn account_balance(&self, address: &str) -> Result<Balance, QueryError> {
            self.calls.borrow_mut().push(format!("balance {address}"));
            if self.fail {
                return Err(QueryError::InvalidAddress(address.to_string()));
            }
            Ok(Balance::from_wei(U256::from(1_500_000_000_000_000_000u128)))
        }

        async fn node_data(&self, node_id: &str) -> Result<NodeData, QueryError> {
            self.calls.borrow_mut().push(format!("node {node_id}"));
            if self.fail {
                return Err(QueryError::EmptyNodeId);
            }
            Ok(NodeData {
                raw: Bytes::from_static(&[0xca, 0xfe]),
                fields: Some(vec![("exists".into(), DynSolValue::Bool(true))]),
            })
        }
    }

    async fn drive(queries: &Recorder, input: impl AsRef<[u8]>) -> String {
        let mut console = Console::new(Cursor::new(input.as_ref().to_vec()), Vec::new());
        run_menu(queries, &mut console).await;
        let (_, out) = console.into_inner();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_first_integer_token() {
        assert_eq!(MenuOption::parse("0"), MenuOption::Exit);
        assert_eq!(MenuOption::parse(" 1 "), MenuOption::Balance);
        assert_eq!(MenuOption::parse("2 trailing"), MenuOption::NodeData);
        assert_eq!(MenuOption::parse("3"), MenuOption::Unknown);
        assert_eq!(MenuOption::parse("-1"), MenuOption::Unknown);
        assert_eq!(MenuOption::parse("one"), MenuOption::Unknown);
        assert_eq!(MenuOption::parse(""), MenuOption::Unknown);
    }

    #[tokio::test]
    async fn exit_prints_farewell_and_nothing_after() {
        let q = Recorder::default();
        let out = drive(&q, "0\n1\n").await;

        assert_eq!(out.matches("Enter the option").count(), 1);
        assert!(out.trim_end().ends_with(&format!(
            "Exiting...\n{}Thank you for using the NetSepio node reader{}",
            cc::LIGHT_GREEN,
            cc::RESET
        )));
        assert!(q.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn unknown_options_only_redisplay_the_menu() {
        let q = Recorder::default();
        let out = drive(&q, "7\nabc\n\n42\n0\n").await;

        assert_eq!(out.matches("1. Get account balance").count(), 5);
        assert!(q.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn balance_option_prints_wei_and_eth() {
        let q = Recorder::default();
        let out = drive(&q, "1\n0x8063E4BA4b473DDdAc016dF9765EB869fcFAf843\n0\n").await;

        assert_eq!(
            *q.calls.borrow(),
            ["balance 0x8063E4BA4b473DDdAc016dF9765EB869fcFAf843"]
        );
        assert!(out.contains("Enter the address: "));
        assert!(out.contains("1500000000000000000 wei"));
        assert!(out.contains("1.500 ETH"));
    }

    #[tokio::test]
    async fn node_option_prints_hex_and_fields() {
        let q = Recorder::default();
        let out = drive(&q, "2\nnode-42\n0\n").await;

        assert_eq!(*q.calls.borrow(), ["node node-42"]);
        assert!(out.contains("Reading node data for ID: node-42..."));
        assert!(out.contains("Node data: cafe"));
        assert!(out.contains("  exists: true"));
    }

    #[tokio::test]
    async fn failed_queries_keep_the_session_alive() {
        let q = Recorder {
            fail: true,
            ..Default::default()
        };
        let out = drive(&q, "1\nnope\n2\nnode-1\n0\n").await;

        assert_eq!(*q.calls.borrow(), ["balance nope", "node node-1"]);
        assert!(out.contains("balance query failed"));
        assert!(out.contains("node read failed"));
        assert!(out.contains("Thank you for using the NetSepio node reader"));
    }

    #[tokio::test]
    async fn non_utf8_option_redisplays_the_menu() {
        let q = Recorder::default();
        let out = drive(
            &q,
            b"\xff\n1\n0x8063E4BA4b473DDdAc016dF9765EB869fcFAf843\n0\n",
        )
        .await;

        assert_eq!(out.matches("1. Get account balance").count(), 3);
        assert_eq!(
            *q.calls.borrow(),
            ["balance 0x8063E4BA4b473DDdAc016dF9765EB869fcFAf843"]
        );
        assert!(out.contains("1.500 ETH"));
        assert!(out.contains("Thank you for using the NetSepio node reader"));
    }

    #[tokio::test]
    async fn end_of_input_ends_the_session() {
        let q = Recorder::default();
        let out = drive(&q, "1\n").await;

        assert!(out.contains("Exiting..."));
        assert!(q.calls.borrow().is_empty());
    }
}
